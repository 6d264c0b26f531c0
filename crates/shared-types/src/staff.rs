use serde::{Deserialize, Serialize};

/// A cashier account as listed for the manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cashier {
    pub user_id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Cashier {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Number of active cashiers, shown on the manager overview.
pub fn active_count(cashiers: &[Cashier]) -> usize {
    cashiers.iter().filter(|c| c.is_active).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cashier_deserializes_is_active_key() {
        let json = r#"[{"userId":"c1","fullName":"Nimal","isActive":true},{"userId":"c2","fullName":"Sunil","email":"s@syos.lk","isActive":false}]"#;
        let cashiers: Vec<Cashier> = serde_json::from_str(json).unwrap();
        assert_eq!(active_count(&cashiers), 1);
        assert_eq!(cashiers[1].status_label(), "Inactive");
        assert_eq!(cashiers[1].email.as_deref(), Some("s@syos.lk"));
    }
}
