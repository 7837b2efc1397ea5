//! The fetcher seam and the scope-owned page session.

use tracing::{debug, info};

use super::FetchError;

/// Navigates to a progress page and returns its rendered markup.
///
/// Implementations own whatever session state they need (an HTTP client, a
/// browser handle). `release` frees it and must tolerate being called on an
/// already idle fetcher.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_page(&mut self, url: &str) -> Result<String, FetchError>;

    fn release(&mut self) {}
}

/// One fetcher, acquired before the entry loop and released exactly once.
///
/// Release happens through `close` or, on any other exit path, on drop.
pub struct PageSession<F: PageFetcher> {
    fetcher: F,
    released: bool,
}

impl<F: PageFetcher> PageSession<F> {
    pub fn open(fetcher: F) -> Self {
        info!("Page session opened");
        Self {
            fetcher,
            released: false,
        }
    }

    /// Release the underlying fetcher now.
    pub fn close(mut self) {
        self.release_once();
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.fetcher.release();
            debug!("Page session released");
        }
    }
}

impl<F: PageFetcher> PageFetcher for PageSession<F> {
    async fn fetch_page(&mut self, url: &str) -> Result<String, FetchError> {
        if self.released {
            return Err(FetchError::SessionClosed);
        }
        self.fetcher.fetch_page(url).await
    }

    fn release(&mut self) {
        self.release_once();
    }
}

impl<F: PageFetcher> Drop for PageSession<F> {
    fn drop(&mut self) {
        self.release_once();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingFetcher {
        releases: Rc<Cell<usize>>,
    }

    impl PageFetcher for CountingFetcher {
        async fn fetch_page(&mut self, url: &str) -> Result<String, FetchError> {
            Ok(format!("<html>{}</html>", url))
        }

        fn release(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    #[test]
    fn test_close_releases_once() {
        let releases = Rc::new(Cell::new(0));
        let session = PageSession::open(CountingFetcher { releases: releases.clone() });
        session.close();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_drop_releases_once() {
        let releases = Rc::new(Cell::new(0));
        {
            let _session = PageSession::open(CountingFetcher { releases: releases.clone() });
        }
        assert_eq!(releases.get(), 1);
    }

    #[tokio::test]
    async fn test_fetch_after_release_fails() {
        let releases = Rc::new(Cell::new(0));
        let mut session = PageSession::open(CountingFetcher { releases: releases.clone() });
        assert!(session.fetch_page("https://example.com").await.is_ok());

        session.release();
        assert!(session.is_released());
        assert!(matches!(
            session.fetch_page("https://example.com").await,
            Err(FetchError::SessionClosed)
        ));

        drop(session);
        assert_eq!(releases.get(), 1);
    }
}
