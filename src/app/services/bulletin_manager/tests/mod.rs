//! Test utilities and mock sources for bulletin manager testing

use crate::app::services::advisory_parser::tests::create_test_parser;
use crate::app::services::bulletin_manager::{AirSigManager, BulletinSource};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub use crate::app::services::advisory_parser::tests::{
    CONVECTIVE_SIGMET, CYCLONE_SIGMET, FUKUOKA_SIGMET,
};

mod manager_tests;

/// In-memory source whose response can be changed between updates
#[derive(Debug, Clone)]
pub struct MockSource {
    name: String,
    /// `None` makes the next fetch fail
    response: Arc<Mutex<Option<Vec<String>>>>,
    delay: Duration,
}

impl MockSource {
    pub fn new(name: &str, bulletins: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            response: Arc::new(Mutex::new(Some(to_strings(bulletins)))),
            delay: Duration::ZERO,
        }
    }

    /// Delay every fetch so completion order differs from declared order
    pub fn with_delay(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    pub fn set_bulletins(&self, bulletins: &[&str]) {
        *self.response.lock().unwrap() = Some(to_strings(bulletins));
    }

    pub fn fail(&self) {
        *self.response.lock().unwrap() = None;
    }
}

#[async_trait]
impl BulletinSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<String>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let response = self.response.lock().unwrap().clone();
        response.ok_or_else(|| Error::bulletin_fetch(&self.name, "source unavailable"))
    }
}

fn to_strings(bulletins: &[&str]) -> Vec<String> {
    bulletins.iter().map(|b| b.to_string()).collect()
}

/// Manager over clones of the given sources, in the given order
pub fn create_test_manager(sources: &[&MockSource]) -> AirSigManager {
    let boxed = sources
        .iter()
        .map(|source| Box::new((*source).clone()) as Box<dyn BulletinSource>)
        .collect();
    AirSigManager::new(boxed, create_test_parser())
}
