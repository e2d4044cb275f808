use crate::core::Commands;
use crate::domain::model::{Animal, Country, Person};

/// Keeps animals whose name contains `pattern` (case-sensitive substring),
/// dropping people and countries left without children. Order is preserved
/// at every level and the input is left untouched.
pub fn filter(countries: &[Country], pattern: &str) -> Vec<Country> {
    countries
        .iter()
        .filter_map(|country| {
            let people: Vec<Person> = country
                .people
                .iter()
                .filter_map(|person| {
                    let animals: Vec<Animal> = person
                        .animals
                        .iter()
                        .filter(|animal| animal.name.contains(pattern))
                        .cloned()
                        .collect();
                    (!animals.is_empty()).then(|| person.with_animals(animals))
                })
                .collect();
            (!people.is_empty()).then(|| country.with_people(people))
        })
        .collect()
}

/// Appends the child count to every country and person name, e.g. `"Dillauti [5]"`.
pub fn count(countries: &[Country]) -> Vec<Country> {
    countries
        .iter()
        .map(|country| {
            let people = country
                .people
                .iter()
                .map(|person| {
                    Person::new(
                        format!("{} [{}]", person.name, person.animals.len()),
                        person.animals.clone(),
                    )
                })
                .collect();
            Country::new(format!("{} [{}]", country.name, country.people.len()), people)
        })
        .collect()
}

/// Production command set, backed by the functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetCommands;

impl Commands for DatasetCommands {
    fn filter(&self, countries: &[Country], pattern: &str) -> Vec<Country> {
        filter(countries, pattern)
    }

    fn count(&self, countries: &[Country]) -> Vec<Country> {
        count(countries)
    }
}
