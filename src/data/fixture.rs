use super::models::{Customer, LocationNode};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const CUSTOMERS_FILE: &str = "customers.json";
const LOCATIONS_FILE: &str = "locations.json";

const EMBEDDED_CUSTOMERS: &str = include_str!("sample/customers.json");
const EMBEDDED_LOCATIONS: &str = include_str!("sample/locations.json");

/// Static sample data backing the Home tab.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub customers: Vec<Customer>,
    pub locations: Vec<LocationNode>,
}

impl Fixture {
    /// Loads from `dir` when given, otherwise from the data compiled into the binary.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let fixture = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::embedded()?,
        };
        fixture.warn_on_duplicates();
        tracing::info!(
            customers = fixture.customers.len(),
            locations = fixture.locations.len(),
            "Fixture loaded"
        );
        Ok(fixture)
    }

    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_CUSTOMERS, EMBEDDED_LOCATIONS)
    }

    pub fn from_dir(dir: &Path) -> Result<Self> {
        let customers_path = dir.join(CUSTOMERS_FILE);
        let locations_path = dir.join(LOCATIONS_FILE);

        let customers = fs::read_to_string(&customers_path)
            .with_context(|| format!("Failed to read {}", customers_path.display()))?;
        let locations = fs::read_to_string(&locations_path)
            .with_context(|| format!("Failed to read {}", locations_path.display()))?;

        Self::parse(&customers, &locations)
    }

    pub fn parse(customers: &str, locations: &str) -> Result<Self> {
        let customers: Vec<Customer> =
            serde_json::from_str(customers).context("Invalid customer fixture")?;
        let locations: Vec<LocationNode> =
            serde_json::from_str(locations).context("Invalid location fixture")?;
        Ok(Self { customers, locations })
    }

    /// Grid rows are keyed by customer id and tree nodes by node id, so
    /// repeated ids make rows or nodes indistinguishable.
    fn warn_on_duplicates(&self) {
        let mut customer_ids = HashSet::new();
        for customer in &self.customers {
            if !customer_ids.insert(customer.id) {
                tracing::warn!(id = customer.id, "Duplicate customer id in fixture");
            }
        }

        let mut node_ids = HashSet::new();
        LocationNode::walk(&self.locations, &mut |node| {
            if !node_ids.insert(node.id.as_str()) {
                tracing::warn!(id = %node.id, "Duplicate location node id in fixture");
            }
        });
    }
}
