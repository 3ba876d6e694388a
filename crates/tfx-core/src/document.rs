//! Export-document kinds and retrieval formats.

use serde::{Deserialize, Serialize};

use crate::error::TfxError;

/// The three export documents presented under an LC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "BL")]
    BillOfLading,
    #[serde(rename = "INVOICE")]
    Invoice,
    #[serde(rename = "PACKINGLIST")]
    PackingList,
}

impl DocumentType {
    /// All export documents, in submission and acceptance order.
    pub const ALL: [DocumentType; 3] = [
        DocumentType::BillOfLading,
        DocumentType::Invoice,
        DocumentType::PackingList,
    ];

    /// Return the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BillOfLading => "BL",
            Self::Invoice => "INVOICE",
            Self::PackingList => "PACKINGLIST",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = TfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| TfxError::UnknownLiteral {
                kind: "document type",
                value: s.to_string(),
            })
    }
}

/// Representation requested when reading back an export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentFormat {
    /// The typed payload, serialized as JSON.
    Json,
    /// The opaque attachment exactly as submitted.
    Pdf,
}

impl std::str::FromStr for DocumentFormat {
    type Err = TfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JSON" => Ok(Self::Json),
            "PDF" => Ok(Self::Pdf),
            other => Err(TfxError::UnknownLiteral {
                kind: "document format",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_literals() {
        assert_eq!("BL".parse::<DocumentType>().unwrap(), DocumentType::BillOfLading);
        assert_eq!("PACKINGLIST".parse::<DocumentType>().unwrap(), DocumentType::PackingList);
        assert!("bl".parse::<DocumentType>().is_err());
        assert_eq!(
            serde_json::to_string(&DocumentType::Invoice).unwrap(),
            "\"INVOICE\""
        );
    }

    #[test]
    fn document_format_literals() {
        assert_eq!("PDF".parse::<DocumentFormat>().unwrap(), DocumentFormat::Pdf);
        assert!("XML".parse::<DocumentFormat>().is_err());
    }
}
