#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormConfig {
    /// Block submission until a delivery date is picked.
    pub require_delivery_date: bool,
}
