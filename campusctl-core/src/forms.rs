//! Submission form records.
//!
//! Flat key-value records built up field by field. The only validation is
//! "required": a submission with blank required fields is rejected, and a
//! complete one is emitted to the diagnostic sink unchanged. There is no
//! persistence behind this boundary.

use serde::Serialize;
use tracing::info;

use crate::item::ItemKind;

/// Account signup form: all fields required, collected as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub roll_no: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Names of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for (name, value) in [
            ("name", &self.name),
            ("rollNo", &self.roll_no),
            ("email", &self.email),
            ("password", &self.password),
            ("confirmPassword", &self.confirm_password),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        missing
    }

    /// Surface the captured record to the diagnostic sink.
    pub fn submit(&self) {
        info!(
            target: "campusctl::submission",
            name = %self.name,
            roll_no = %self.roll_no,
            email = %self.email,
            "signup attempt"
        );
    }
}

/// Lost-or-found item report form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemReport {
    #[serde(rename = "type")]
    pub kind: Option<ItemKind>,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ItemReport {
    /// Names of required fields that are still blank. The image is optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.kind.is_none() {
            missing.push("type");
        }
        for (name, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        missing
    }

    /// Surface the captured record to the diagnostic sink.
    pub fn submit(&self) {
        info!(
            target: "campusctl::submission",
            kind = self.kind.map(|k| k.as_str()),
            title = %self.title,
            location = %self.location,
            "item report"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_signup_reports_every_field() {
        let form = SignupForm::default();
        assert_eq!(
            form.missing_fields(),
            vec!["name", "rollNo", "email", "password", "confirmPassword"]
        );
    }

    #[test]
    fn complete_signup_has_no_missing_fields() {
        let form = SignupForm {
            name: "John Doe".to_string(),
            roll_no: "2021BCS001".to_string(),
            email: "yourname@nitgoa.ac.in".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let report = ItemReport {
            kind: Some(ItemKind::Lost),
            title: "   ".to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            image: None,
        };
        assert_eq!(report.missing_fields(), vec!["title"]);
    }

    #[test]
    fn signup_serializes_flat_camel_case_record() {
        let form = SignupForm {
            name: "John Doe".to_string(),
            roll_no: "2021BCS001".to_string(),
            email: "yourname@nitgoa.ac.in".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["rollNo"], "2021BCS001");
        assert_eq!(json["confirmPassword"], "secret");
    }

    #[test]
    fn report_serializes_flat_record() {
        let report = ItemReport {
            kind: Some(ItemKind::Found),
            title: "Blue Umbrella".to_string(),
            description: "Wooden handle".to_string(),
            location: "Library".to_string(),
            image: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "found");
        assert_eq!(json["title"], "Blue Umbrella");
        assert!(json.get("image").is_none());
    }
}
