//! Problem data: knapsack items and TSP cities.

/// An item that may be packed into the knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Caller-assigned identifier.
    pub id: i64,
    /// Weight counted against the capacity.
    pub weight: f64,
    /// Value gained when the item is packed.
    pub value: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(id: i64, weight: f64, value: f64) -> Self {
        Self { id, weight, value }
    }
}

/// A city on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Caller-assigned identifier.
    pub id: i64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to another city.
    ///
    /// ```
    /// use u_tabu::model::City;
    ///
    /// let a = City::new(1, 0.0, 0.0);
    /// let b = City::new(2, 3.0, 4.0);
    /// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    /// ```
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetric() {
        let a = City::new(1, -1.5, 2.0);
        let b = City::new(2, 4.0, -3.0);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_item_new() {
        let item = Item::new(7, 2.5, 10.0);
        assert_eq!(item.id, 7);
        assert!((item.weight - 2.5).abs() < 1e-12);
        assert!((item.value - 10.0).abs() < 1e-12);
    }
}
