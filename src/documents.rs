//! QTI document handling
//!
//! [`QtiDocument`] is the entry point for loading an item: it detects the QTI
//! version from the root namespace and builds the typed
//! [`AssessmentItem`](crate::qti::AssessmentItem) tree.

use std::fmt;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::loaders::Loader;
use crate::namespaces::{QTI_V2P0_NAMESPACE, QTI_V2P1_NAMESPACE, QTI_V2P2_NAMESPACE};
use crate::qti::{parse_assessment_item, AssessmentItem};

/// QTI version of a document, identified by its root namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QtiVersion {
    /// QTI 2.0
    V2p0,
    /// QTI 2.1
    V2p1,
    /// QTI 2.2
    V2p2,
}

impl QtiVersion {
    /// Identify the version from a namespace URI
    pub fn from_namespace(uri: &str) -> Option<Self> {
        match uri {
            QTI_V2P0_NAMESPACE => Some(QtiVersion::V2p0),
            QTI_V2P1_NAMESPACE => Some(QtiVersion::V2p1),
            QTI_V2P2_NAMESPACE => Some(QtiVersion::V2p2),
            _ => None,
        }
    }

    /// The namespace URI of the version
    pub fn namespace(&self) -> &'static str {
        match self {
            QtiVersion::V2p0 => QTI_V2P0_NAMESPACE,
            QtiVersion::V2p1 => QTI_V2P1_NAMESPACE,
            QtiVersion::V2p2 => QTI_V2P2_NAMESPACE,
        }
    }

    /// Get as version string
    pub fn as_str(&self) -> &'static str {
        match self {
            QtiVersion::V2p0 => "2.0",
            QtiVersion::V2p1 => "2.1",
            QtiVersion::V2p2 => "2.2",
        }
    }
}

impl fmt::Display for QtiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loaded QTI item document
#[derive(Debug, Clone)]
pub struct QtiDocument {
    item: AssessmentItem,
    version: Option<QtiVersion>,
}

impl QtiDocument {
    /// Load a document from a string with default limits
    pub fn from_string(xml: &str) -> Result<Self> {
        Self::from_string_with_limits(xml, &Limits::default())
    }

    /// Load a document from a string
    pub fn from_string_with_limits(xml: &str, limits: &Limits) -> Result<Self> {
        let version = detect_version(xml)?;
        if version.is_none() {
            tracing::debug!("document root is not in a QTI 2.x namespace");
        }
        let item = parse_assessment_item(xml, limits)?;
        Ok(Self { item, version })
    }

    /// Load a document from a file
    pub fn from_file(path: impl AsRef<Path>, limits: &Limits) -> Result<Self> {
        let xml = Loader::new().with_limits(limits.clone()).load(path)?;
        Self::from_string_with_limits(&xml, limits)
    }

    /// The assessment item
    pub fn item(&self) -> &AssessmentItem {
        &self.item
    }

    /// Take the assessment item
    pub fn into_item(self) -> AssessmentItem {
        self.item
    }

    /// QTI version, if the root namespace is a known one
    pub fn version(&self) -> Option<QtiVersion> {
        self.version
    }
}

/// Read the default namespace of the root element
fn detect_version(xml: &str) -> Result<Option<QtiVersion>> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                for attr in e.attributes() {
                    let attr = attr
                        .map_err(|e| Error::Xml(format!("Failed to parse attribute: {}", e)))?;
                    if attr.key.as_ref() == b"xmlns" {
                        let uri = attr.unescape_value()?;
                        return Ok(QtiVersion::from_namespace(&uri));
                    }
                }
                return Ok(None);
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => {
                return Err(Error::Xml(format!(
                    "Error parsing XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {} // Skip the declaration, comments and doctype
        }
    }
}
