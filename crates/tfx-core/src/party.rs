//! # Contract Parties
//!
//! The four banking and trading roles that participate in an LC contract,
//! plus the wider company roles used by the name-based contract search.

use serde::{Deserialize, Serialize};

use crate::error::TfxError;

/// A participant role in an LC contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Buyer of the goods.
    Importer,
    /// Seller of the goods.
    Exporter,
    /// Bank that issues the letter of credit.
    ImporterBank,
    /// Bank that presents the export documents.
    ExporterBank,
}

impl Role {
    /// All participant roles, in the order they are reported.
    pub const ALL: [Role; 4] = [
        Role::Importer,
        Role::Exporter,
        Role::ImporterBank,
        Role::ExporterBank,
    ];

    /// Return the wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Importer => "Importer",
            Self::Exporter => "Exporter",
            Self::ImporterBank => "ImporterBank",
            Self::ExporterBank => "ExporterBank",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = TfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| TfxError::UnknownLiteral {
                kind: "role",
                value: s.to_string(),
            })
    }
}

/// A company role addressed by numeric code in name-based searches.
///
/// Codes: `1` Exporter, `2` ExporterBank, `3` ShippingCompany,
/// `4` Importer, `5` ImporterBank, `6` InsuranceCompany.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyRole {
    Exporter,
    ExporterBank,
    ShippingCompany,
    Importer,
    ImporterBank,
    InsuranceCompany,
}

impl CompanyRole {
    /// Resolve a numeric role code.
    pub fn from_code(code: &str) -> Result<Self, TfxError> {
        match code.trim() {
            "1" => Ok(Self::Exporter),
            "2" => Ok(Self::ExporterBank),
            "3" => Ok(Self::ShippingCompany),
            "4" => Ok(Self::Importer),
            "5" => Ok(Self::ImporterBank),
            "6" => Ok(Self::InsuranceCompany),
            other => Err(TfxError::UnknownLiteral {
                kind: "company role code",
                value: other.to_string(),
            }),
        }
    }

    /// The numeric code for this role.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Exporter => "1",
            Self::ExporterBank => "2",
            Self::ShippingCompany => "3",
            Self::Importer => "4",
            Self::ImporterBank => "5",
            Self::InsuranceCompany => "6",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_literal() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "Carrier".parse::<Role>().unwrap_err();
        assert!(err.to_string().contains("Carrier"));
    }

    #[test]
    fn company_role_codes() {
        assert_eq!(CompanyRole::from_code("1").unwrap(), CompanyRole::Exporter);
        assert_eq!(CompanyRole::from_code("3").unwrap(), CompanyRole::ShippingCompany);
        assert_eq!(CompanyRole::from_code("6").unwrap(), CompanyRole::InsuranceCompany);
        assert_eq!(CompanyRole::ImporterBank.code(), "5");
        assert!(CompanyRole::from_code("7").is_err());
    }
}
