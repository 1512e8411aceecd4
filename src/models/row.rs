use crate::data::Customer;
use std::borrow::Cow;

/// A customer as projected into the grid. `id` is the row identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
}

impl CustomerRow {
    /// Looks a field up by its identifier (`pinCode`, not `pin_code`).
    /// Unknown identifiers return `None`.
    pub fn field_value(&self, field: &str) -> Option<Cow<'_, str>> {
        let value = match field {
            "id" => Cow::Owned(self.id.to_string()),
            "name" => Cow::Borrowed(self.name.as_str()),
            "address" => Cow::Borrowed(self.address.as_str()),
            "city" => Cow::Borrowed(self.city.as_str()),
            "state" => Cow::Borrowed(self.state.as_str()),
            "pinCode" => Cow::Borrowed(self.pin_code.as_str()),
            "country" => Cow::Borrowed(self.country.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            address: customer.address.clone(),
            city: customer.city.clone(),
            state: customer.state.clone(),
            pin_code: customer.pin_code.clone(),
            country: customer.country.clone(),
        }
    }
}

pub fn project_rows(customers: &[Customer]) -> Vec<CustomerRow> {
    customers.iter().map(CustomerRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Fixture;

    #[test]
    fn test_projection_preserves_every_value() {
        let fixture = Fixture::embedded().unwrap();
        let rows = project_rows(&fixture.customers);

        assert_eq!(rows.len(), fixture.customers.len());
        for (row, customer) in rows.iter().zip(&fixture.customers) {
            assert_eq!(row.id, customer.id);
            assert_eq!(row.name, customer.name);
            assert_eq!(row.address, customer.address);
            assert_eq!(row.city, customer.city);
            assert_eq!(row.state, customer.state);
            assert_eq!(row.pin_code, customer.pin_code);
            assert_eq!(row.country, customer.country);
        }
    }

    #[test]
    fn test_field_value_by_identifier() {
        let fixture = Fixture::embedded().unwrap();
        let row = CustomerRow::from(&fixture.customers[0]);

        assert_eq!(row.field_value("id").as_deref(), Some("1"));
        assert_eq!(row.field_value("pinCode").as_deref(), Some(row.pin_code.as_str()));
        assert_eq!(row.field_value("state").as_deref(), Some(row.state.as_str()));
        assert_eq!(row.field_value("pin_code"), None, "Rust field names are not identifiers");
        assert_eq!(row.field_value("planet"), None);
    }
}
