//! Query Builder.
//!
//! Translates the optional numeric search parameters into range clauses over
//! stored document fields. Each provided parameter `v` constrains its field
//! to the half-open interval `[v, v + 1)`; clauses AND together, and an
//! empty filter matches every document.

use serde_json::Value as JsonValue;

/// One range clause: the stored `field` must hold a number in `[lo, lo + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeClause {
    pub field: &'static str,
    pub lo: f64,
}

impl RangeClause {
    pub fn hi(&self) -> f64 {
        self.lo + 1.0
    }

    /// Whether `doc` satisfies this clause. Only numeric stored values can
    /// match; strings holding digits do not (range operators compare within
    /// a type, they never parse).
    pub fn matches(&self, doc: &JsonValue) -> bool {
        match doc.get(self.field).and_then(JsonValue::as_f64) {
            Some(v) => v >= self.lo && v < self.hi(),
            None => false,
        }
    }
}

/// The search endpoints' optional parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchFilter {
    pub number_of_turns: Option<f64>,
    pub diameter: Option<f64>,
    pub number_of_sewers: Option<f64>,
}

impl SearchFilter {
    /// Compiles the filter into range clauses, one per provided parameter.
    pub fn clauses(&self) -> Vec<RangeClause> {
        let mut clauses = Vec::new();
        if let Some(v) = self.number_of_turns {
            clauses.push(RangeClause {
                field: "numberOfTurns",
                lo: v,
            });
        }
        if let Some(v) = self.diameter {
            clauses.push(RangeClause {
                field: "motorDiameter1",
                lo: v,
            });
        }
        if let Some(v) = self.number_of_sewers {
            clauses.push(RangeClause {
                field: "numberOfSewers",
                lo: v,
            });
        }
        clauses
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_turns.is_none() && self.diameter.is_none() && self.number_of_sewers.is_none()
    }

    /// Whether `doc` satisfies every provided clause. With no parameters,
    /// every document matches.
    pub fn matches(&self, doc: &JsonValue) -> bool {
        self.clauses().iter().all(|c| c.matches(doc))
    }
}
