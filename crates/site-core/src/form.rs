use crate::constants::{CONTACT_CONFIRMATION, CONTACT_FAILURE};
use crate::error::SiteResult;

/// Destination for contact form submissions.
pub trait SubmissionSink {
    fn submit(&self, fields: &[(String, String)]) -> SiteResult<()>;
}

/// Accepts every submission without sending it anywhere.
#[derive(Default, Clone, Copy, Debug)]
pub struct AcknowledgeOnly;

impl SubmissionSink for AcknowledgeOnly {
    fn submit(&self, fields: &[(String, String)]) -> SiteResult<()> {
        log::debug!("[form] acknowledged {} field(s) without delivery", fields.len());
        Ok(())
    }
}

/// Notice shown to the visitor, and whether the form should be cleared.
pub fn outcome_notice(result: &SiteResult<()>) -> (&'static str, bool) {
    match result {
        Ok(()) => (CONTACT_CONFIRMATION, true),
        Err(e) => {
            log::warn!("[form] {e}");
            (CONTACT_FAILURE, false)
        }
    }
}
