//! XML namespace handling
//!
//! Qualified names for the content tree and the namespaces a QTI item is
//! expected to use.

use std::fmt;

/// QTI 2.0 namespace
pub const QTI_V2P0_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsqti_v2p0";

/// QTI 2.1 namespace
pub const QTI_V2P1_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsqti_v2p1";

/// QTI 2.2 namespace
pub const QTI_V2P2_NAMESPACE: &str = "http://www.imsglobal.org/xsd/imsqti_v2p2";

/// MathML namespace
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// XML namespace
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Check if a namespace URI is one of the QTI 2.x item namespaces
pub fn is_qti_namespace(uri: &str) -> bool {
    matches!(
        uri,
        QTI_V2P0_NAMESPACE | QTI_V2P1_NAMESPACE | QTI_V2P2_NAMESPACE
    )
}

/// Qualified name (QName) - combination of namespace and local name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace URI (None for no namespace)
    pub namespace: Option<String>,
    /// Local name
    pub local_name: String,
}

impl QName {
    /// Create a QName without a namespace
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local_name: local_name.into(),
        }
    }

    /// Create a QName with a namespace
    pub fn namespaced(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local_name: local_name.into(),
        }
    }

    /// Build a QName from an optional namespace, treating QTI namespaces as
    /// the default (no namespace) so markup is written without prefixes
    pub fn from_parts(namespace: Option<&str>, local_name: &str) -> Self {
        match namespace {
            Some(ns) if !is_qti_namespace(ns) => Self::namespaced(ns, local_name),
            _ => Self::local(local_name),
        }
    }

    /// Check if the name lives in the given namespace
    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace.as_deref() == Some(namespace)
    }

    /// Drop the namespace, keeping only the local name
    pub fn strip_namespace(&mut self) {
        self.namespace = None;
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{}}}{}", ns, self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}
