use serde::{Deserialize, Serialize};

/// A customer record as it appears in the fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub country: String,
}

/// A node in the country → state → city navigation tree.
///
/// `category` names the customer field this node filters on and `value`
/// is the text that field must equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationNode {
    pub id: String,
    pub category: String,
    pub value: String,
    #[serde(default)]
    pub children: Vec<LocationNode>,
}

impl LocationNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first lookup of a node by id in a forest.
    pub fn find<'a>(nodes: &'a [LocationNode], id: &str) -> Option<&'a LocationNode> {
        for node in nodes {
            if node.id == id {
                return Some(node);
            }
            if let Some(found) = Self::find(&node.children, id) {
                return Some(found);
            }
        }
        None
    }

    /// Visits every node of the forest in depth-first order.
    pub fn walk<'a>(nodes: &'a [LocationNode], visit: &mut impl FnMut(&'a LocationNode)) {
        for node in nodes {
            visit(node);
            Self::walk(&node.children, visit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, category: &str, value: &str, children: Vec<LocationNode>) -> LocationNode {
        LocationNode {
            id: id.to_string(),
            category: category.to_string(),
            value: value.to_string(),
            children,
        }
    }

    #[test]
    fn test_find_nested_node() {
        let forest = vec![node(
            "india",
            "country",
            "India",
            vec![node("india-karnataka", "state", "Karnataka", vec![node("india-karnataka-mysuru", "city", "Mysuru", vec![])])],
        )];

        let found = LocationNode::find(&forest, "india-karnataka-mysuru").expect("city node");
        assert_eq!(found.value, "Mysuru");
        assert!(found.is_leaf());
        assert!(LocationNode::find(&forest, "germany").is_none());
    }

    #[test]
    fn test_walk_visits_in_depth_first_order() {
        let forest = vec![
            node("a", "country", "A", vec![node("a-1", "state", "A1", vec![])]),
            node("b", "country", "B", vec![]),
        ];
        let mut ids = Vec::new();
        LocationNode::walk(&forest, &mut |n| ids.push(n.id.as_str()));
        assert_eq!(ids, vec!["a", "a-1", "b"]);
    }

    #[test]
    fn test_customer_uses_camel_case_keys() {
        let json = r#"{"id":7,"name":"N","address":"A","city":"C","state":"S","pinCode":"0101","country":"X"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.pin_code, "0101", "Pin code keeps leading zeros");
    }
}
