//! Response processing templates
//!
//! QTI items usually score responses by referencing one of the standard
//! response processing templates instead of spelling out response rules.
//! Only the standard templates are understood; any other reference resolves
//! to [`ResponseProcessingTemplate::Unsupported`].

use std::fmt;

use url::Url;

use crate::diagnostics::Diagnostics;
use crate::qti::ResponseProcessing;

const RPTEMPLATES_HOST: &str = "www.imsglobal.org";

const RPTEMPLATES_PATHS: &[&str] = &[
    "/question/qti_v2p0/rptemplates/",
    "/question/qti_v2p1/rptemplates/",
    "/question/qti_v2p2/rptemplates/",
];

/// A resolved response processing template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseProcessingTemplate {
    /// `match_correct`: full marks for the declared correct response
    MatchCorrect,
    /// `map_response`: points from the declared mapping
    MapResponse,
    /// `map_response_point`: points from an area mapping
    MapResponsePoint,
    /// Any other reference, kept verbatim
    Unsupported(String),
}

impl ResponseProcessingTemplate {
    /// Resolve a template reference.
    ///
    /// Accepts the standard `rptemplates` URLs of QTI 2.0, 2.1 and 2.2, with
    /// or without the `.xml` extension, and the bare template names.
    pub fn from_template_url(reference: &str) -> Self {
        let reference = reference.trim();

        let name = match Url::parse(reference) {
            Ok(url) => standard_template_name(&url).map(str::to_string),
            Err(_) => Some(reference.to_string()),
        };

        match name.as_deref() {
            Some("match_correct") => ResponseProcessingTemplate::MatchCorrect,
            Some("map_response") => ResponseProcessingTemplate::MapResponse,
            Some("map_response_point") => ResponseProcessingTemplate::MapResponsePoint,
            _ => ResponseProcessingTemplate::Unsupported(reference.to_string()),
        }
    }

    /// Template name as used in the standard URLs
    pub fn name(&self) -> &str {
        match self {
            ResponseProcessingTemplate::MatchCorrect => "match_correct",
            ResponseProcessingTemplate::MapResponse => "map_response",
            ResponseProcessingTemplate::MapResponsePoint => "map_response_point",
            ResponseProcessingTemplate::Unsupported(reference) => reference,
        }
    }

    /// Check if the template is one of the standard ones
    pub fn is_supported(&self) -> bool {
        !matches!(self, ResponseProcessingTemplate::Unsupported(_))
    }
}

impl fmt::Display for ResponseProcessingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn standard_template_name(url: &Url) -> Option<&str> {
    if url.host_str() != Some(RPTEMPLATES_HOST) {
        return None;
    }
    let path = url.path();
    let prefix = RPTEMPLATES_PATHS.iter().find(|p| path.starts_with(*p))?;
    let name = &path[prefix.len()..];
    Some(name.strip_suffix(".xml").unwrap_or(name))
}

/// Resolve the template of an item's `<responseProcessing>`, recording a
/// WARNING for everything that is ignored on the way.
///
/// Returns `None` when the item has no usable template.
pub fn resolve_template(
    response_processing: Option<&ResponseProcessing>,
    diagnostics: &mut Diagnostics,
) -> Option<ResponseProcessingTemplate> {
    let response_processing = response_processing?;

    if !response_processing.response_rules.is_empty() {
        diagnostics.warn_on(
            "responseProcessing",
            "Does not support custom response processing on <responseProcessing>. Ignoring <responseProcessing>",
        );
    }
    if response_processing.template_location.is_some() {
        diagnostics.warn_on(
            "responseProcessing",
            "Does not support 'templateLocation' on <responseProcessing>. Ignoring <responseProcessing>",
        );
    }

    let reference = response_processing.template.as_deref()?;
    let template = ResponseProcessingTemplate::from_template_url(reference);
    tracing::debug!(reference, template = %template, "resolved response processing template");

    if template.is_supported() {
        Some(template)
    } else {
        diagnostics.warn_on(
            "responseProcessing",
            "Does not support custom response processing templates. Ignoring <responseProcessing>",
        );
        None
    }
}
