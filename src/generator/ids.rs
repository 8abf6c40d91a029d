/// Scenario identifier source scoped to a single generation call.
///
/// Identifiers are `TC_1`, `TC_2`, ... and restart for every new source, so two
/// calls over the same input produce the same identifiers.
#[derive(Debug, Clone)]
pub struct ScenarioIds {
    next: usize,
}

impl ScenarioIds {
    /// Start a fresh sequence at `TC_1`.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next identifier.
    pub fn next_id(&mut self) -> String {
        let id = format!("TC_{}", self.next);
        self.next += 1;
        id
    }
}

impl Default for ScenarioIds {
    fn default() -> Self {
        Self::new()
    }
}
