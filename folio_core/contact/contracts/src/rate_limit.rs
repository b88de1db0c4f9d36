use std::{future::Future, net::IpAddr};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRateLimitService: Send + Sync + 'static {
    /// Count a message from `client` against its current window.
    ///
    /// Returns `false` if the client has already used up its quota, in which
    /// case nothing is counted.
    fn acquire(&self, client: IpAddr) -> impl Future<Output = bool> + Send;
}

#[cfg(feature = "mock")]
impl MockContactRateLimitService {
    pub fn with_acquire(mut self, client: IpAddr, result: bool) -> Self {
        self.expect_acquire()
            .once()
            .with(mockall::predicate::eq(client))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
