use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: &str, number: &str) -> Self {
        Contact {
            name: name.to_owned(),
            number: number.to_owned(),
        }
    }

    /// Replaces the number in place, the name never changes once stored
    pub(crate) fn set_number(&mut self, number: &str) {
        self.number.clear();
        self.number.push_str(number);
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
