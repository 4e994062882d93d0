//! Wire types for the line-status API and the projection used for output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TpspError;

/// Top-level document returned by the line-status endpoint.
///
/// `status` is the API's own success flag; a `false` here is treated as a
/// failure even when the HTTP exchange succeeded.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub data: Vec<ServiceData>,
}

/// One operator's batch of lines.
///
/// The upstream API omits fields freely, so everything defaults rather than
/// failing the decode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceData {
    #[serde(default)]
    pub list_item: Vec<LineItem>,
    #[serde(default)]
    pub date_update: String,
    /// Operator name as reported by the API (e.g. `"metro"`).
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// A single line's status, verbatim from the API.
///
/// `line` embeds the line's color name after the last `-`
/// (e.g. `"Linha 1-Azul"`); `status_color` is a Portuguese color tag
/// indicating severity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub line: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub status_color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
}

/// Display-only projection of a [`LineItem`] for JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub line: String,
    pub status: String,
}

/// Envelope for JSON mode. Field order is part of the output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputResponse {
    pub code: u16,
    pub data: Vec<OutputLine>,
    pub message: String,
}

/// The fixed set of operators the API reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Metro,
    Cptm,
    ViaMobilidade,
    ViaQuatro,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Metro,
        Service::Cptm,
        Service::ViaMobilidade,
        Service::ViaQuatro,
    ];

    /// Canonical lowercase name, as accepted on the command line and as
    /// reported in [`ServiceData::kind`].
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Metro => "metro",
            Service::Cptm => "cptm",
            Service::ViaMobilidade => "viamobilidade",
            Service::ViaQuatro => "viaquatro",
        }
    }

    /// Case-insensitive match against an operator name from the API.
    pub fn matches(self, operator: &str) -> bool {
        operator.eq_ignore_ascii_case(self.as_str())
    }
}

impl FromStr for Service {
    type Err = TpspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|svc| svc.matches(s))
            .ok_or_else(|| TpspError::InvalidService(s.to_string()))
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_from_str_is_case_insensitive() {
        assert_eq!("metro".parse::<Service>().unwrap(), Service::Metro);
        assert_eq!("CPTM".parse::<Service>().unwrap(), Service::Cptm);
        assert_eq!(
            "ViaMobilidade".parse::<Service>().unwrap(),
            Service::ViaMobilidade
        );
        assert_eq!("VIAQUATRO".parse::<Service>().unwrap(), Service::ViaQuatro);
    }

    #[test]
    fn test_service_from_str_rejects_unknown() {
        let err = "tram".parse::<Service>().unwrap_err();
        assert!(matches!(err, TpspError::InvalidService(ref s) if s == "tram"));
    }

    #[test]
    fn test_decode_full_response() {
        let body = r##"{
            "status": true,
            "data": [
                {
                    "listItem": [
                        {
                            "id": "1",
                            "line": "Linha 1-Azul",
                            "color": "#0455A1",
                            "status": "Operação Normal",
                            "statusColor": "verde",
                            "description": "",
                            "code": "L1"
                        }
                    ],
                    "dateUpdate": "06/08/2026 10:15",
                    "type": "metro"
                }
            ]
        }"##;

        let resp: ApiResponse = serde_json::from_str(body).unwrap();
        assert!(resp.status);
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].kind, "metro");
        assert_eq!(resp.data[0].list_item[0].line, "Linha 1-Azul");
        assert_eq!(resp.data[0].list_item[0].status_color, "verde");
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let body = r#"{"status": true, "data": [{"type": "cptm"}]}"#;

        let resp: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data[0].kind, "cptm");
        assert!(resp.data[0].list_item.is_empty());
        assert_eq!(resp.data[0].date_update, "");
    }
}
