//! In-process `CvProvider` used by handler and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::prompts::CvFormat;
use super::{CvProvider, ProviderError};

enum Reply {
    Text(String),
    Fail(String),
    Empty,
}

/// Returns a canned reply and records every call.
pub struct FakeProvider {
    name: &'static str,
    reply: Reply,
    calls: AtomicUsize,
    last_input: Mutex<Option<(String, String)>>,
    last_format: Mutex<Option<CvFormat>>,
}

impl FakeProvider {
    pub fn replying(name: &'static str, text: &str) -> Self {
        Self::with_reply(name, Reply::Text(text.to_string()))
    }

    /// Fails every call with a vendor-style error carrying `reason`.
    pub fn failing(name: &'static str, reason: &str) -> Self {
        Self::with_reply(name, Reply::Fail(reason.to_string()))
    }

    /// Answers every call with no usable text.
    pub fn empty(name: &'static str) -> Self {
        Self::with_reply(name, Reply::Empty)
    }

    fn with_reply(name: &'static str, reply: Reply) -> Self {
        Self {
            name,
            reply,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
            last_format: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(cv_text, job_description)` of the most recent call.
    pub fn last_input(&self) -> Option<(String, String)> {
        self.last_input.lock().unwrap().clone()
    }

    /// Prompt variant requested by the most recent call.
    pub fn last_format(&self) -> Option<CvFormat> {
        *self.last_format.lock().unwrap()
    }
}

#[async_trait]
impl CvProvider for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn tailor(
        &self,
        format: CvFormat,
        cv_text: &str,
        job_description: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_format.lock().unwrap() = Some(format);
        *self.last_input.lock().unwrap() = Some((cv_text.to_string(), job_description.to_string()));

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(reason) => Err(ProviderError::Api {
                status: 503,
                message: reason.clone(),
            }),
            Reply::Empty => Err(ProviderError::EmptyContent),
        }
    }
}
