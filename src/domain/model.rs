use crate::domain::ports::Vehicle;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CAR_ENGINE_PHRASE: &str = "Двигун запущено";
pub const MOTORCYCLE_ENGINE_PHRASE: &str = "Мотор заведено";

/// Market a vehicle is built for. Rendered as the `US` / `EU` spec tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Us,
    Eu,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Eu => "EU",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    make: String,
    model: String,
    spec: Region,
}

impl Car {
    // Only factories build vehicles.
    pub(crate) fn new(make: &str, model: &str, spec: Region) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            spec,
        }
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn spec(&self) -> Region {
        self.spec
    }

    fn start_engine(&self) -> String {
        format!(
            "{} {} ({} Spec): {}",
            self.make, self.model, self.spec, CAR_ENGINE_PHRASE
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motorcycle {
    make: String,
    model: String,
    spec: Region,
}

impl Motorcycle {
    pub(crate) fn new(make: &str, model: &str, spec: Region) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            spec,
        }
    }
}

impl Vehicle for Motorcycle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn spec(&self) -> Region {
        self.spec
    }

    fn start_engine(&self) -> String {
        format!(
            "{} {} ({} Spec): {}",
            self.make, self.model, self.spec, MOTORCYCLE_ENGINE_PHRASE
        )
    }
}

/// A catalog entry. `year` stays textual; nothing checks its range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_display() {
        let book = Book::new("Dune", "Herbert", "1965");
        assert_eq!(book.to_string(), "Title: Dune, Author: Herbert, Year: 1965");
    }

    #[test]
    fn test_book_accepts_empty_fields() {
        let book = Book::new("", "", "");
        assert_eq!(book.to_string(), "Title: , Author: , Year: ");
    }

    #[test]
    fn test_region_tags() {
        assert_eq!(Region::Us.to_string(), "US");
        assert_eq!(Region::Eu.to_string(), "EU");
    }

    #[test]
    fn test_car_and_motorcycle_phrases_differ() {
        let car = Car::new("Ford", "Mustang", Region::Us);
        let bike = Motorcycle::new("Ford", "Mustang", Region::Us);
        assert_eq!(car.start_engine(), "Ford Mustang (US Spec): Двигун запущено");
        assert_eq!(bike.start_engine(), "Ford Mustang (US Spec): Мотор заведено");
    }
}
