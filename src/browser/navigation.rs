use super::js_error;
use crate::submit::{Delay, Navigator};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use web_sys::Location;

pub struct WindowNavigator {
    location: Location,
}

impl WindowNavigator {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) {
        if let Err(e) = self.location.set_href(url) {
            tracing::error!("Navigation to {} failed: {}", url, js_error(e));
        }
    }

    fn reload(&self) {
        if let Err(e) = self.location.reload() {
            tracing::error!("Reload failed: {}", js_error(e));
        }
    }
}

pub struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
