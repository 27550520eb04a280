//! Fake payload generator
//!
//! `Fake` wraps a caller-supplied RNG and builds randomized but plausible
//! request payloads. It is an ordinary value: construct one per run (seeded
//! for reproducibility if needed) and pass it to whatever builds requests.

pub mod entity;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::ser::Error as _;

use crate::domain::state::State;
use crate::dto::operation::{CreateOperation, Credentials};
use entity::{Address, Agent, Company, Contact, EntityData, Member, Organizer};

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark",
];

const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Sunset",
    "Ridge", "Meadow", "Church", "Mill", "River",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Ct", "Way"];

const CITIES: &[&str] = &[
    "Springfield", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview", "Salem",
    "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson", "Burlington",
];

const COUNTIES: &[&str] = &[
    "Jefferson", "Washington", "Franklin", "Lincoln", "Jackson", "Madison", "Monroe", "Marion",
    "Clay", "Union", "Wayne", "Warren",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Holdings", "Group", "Partners", "Ventures", "Industries", "Solutions", "Enterprises",
    "Associates", "Labs", "Works",
];

const DESIGNATORS: &[&str] = &["LLC", "Inc.", "Corp.", "Ltd.", "LP", "LLP"];

const ENTITY_TYPES: &[&str] = &["LLC", "Corporation", "Partnership", "Sole Proprietorship"];

const ACTIVITY_TYPES: &[&str] = &[
    "Professional Services",
    "Retail",
    "Manufacturing",
    "Technology",
    "Real Estate",
];

/// USPS codes for postal addresses, distinct from the service's jurisdictions
const US_STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

const PASSWORD_LENGTH: usize = 12;

/// Randomized payload generator
#[derive(Debug, Clone)]
pub struct Fake<R> {
    rng: R,
}

impl Fake<StdRng> {
    /// Generator with a fixed seed; the same seed yields the same payloads
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Fake<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.random_range(0..items.len())]
    }

    fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
            .collect()
    }

    pub fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    pub fn company_name(&mut self) -> String {
        format!("{} {}", self.pick(LAST_NAMES), self.pick(COMPANY_SUFFIXES))
    }

    pub fn email(&mut self) -> String {
        let first = self.pick(FIRST_NAMES).to_lowercase();
        let last = self.pick(LAST_NAMES).to_lowercase();
        let n = self.rng.random_range(1..100);
        format!("{first}.{last}{n}@{}", self.pick(EMAIL_DOMAINS))
    }

    pub fn phone_number(&mut self) -> String {
        let area = self.rng.random_range(200..1000);
        let exchange = self.rng.random_range(200..1000);
        format!("({area}) {exchange}-{}", self.digits(4))
    }

    /// USPS abbreviation of a random US state
    pub fn state_abbr(&mut self) -> String {
        self.pick(US_STATE_ABBRS).to_string()
    }

    /// `12345` or `12345-6789`, with equal odds
    pub fn zip_code(&mut self) -> String {
        let zip = self.digits(5);
        if self.coin() {
            zip
        } else {
            format!("{zip}-{}", self.digits(4))
        }
    }

    pub fn address(&mut self) -> Address {
        let number = self.rng.random_range(1..10_000);
        let street = format!(
            "{number} {} {}",
            self.pick(STREET_NAMES),
            self.pick(STREET_SUFFIXES)
        );
        let extra = if self.coin() {
            let unit = self.rng.random_range(1..1000);
            Some(format!("{} {unit}", if self.coin() { "Apt." } else { "Suite" }))
        } else {
            None
        };

        Address {
            street,
            extra,
            city: self.pick(CITIES).to_string(),
            state: self.state_abbr(),
            zip_code: self.zip_code(),
            county: self.pick(COUNTIES).to_string(),
        }
    }

    pub fn company(&mut self) -> Company {
        Company {
            name: self.company_name(),
            designator: self.pick(DESIGNATORS).to_string(),
            address: self.address(),
            mailing_address: self.address(),
        }
    }

    pub fn contact(&mut self) -> Contact {
        Contact {
            first_name: self.first_name(),
            last_name: self.last_name(),
            email: self.email(),
            mobile: self.phone_number(),
        }
    }

    pub fn member(&mut self) -> Member {
        let is_individual = self.coin();
        let (first_name, last_name, company_name) = if is_individual {
            (Some(self.first_name()), Some(self.last_name()), None)
        } else {
            (None, None, Some(self.company_name()))
        };

        Member {
            is_individual,
            first_name,
            last_name,
            company_name,
            address: self.address(),
            percent_of_ownership: self.rng.random_range(1..=100),
        }
    }

    pub fn agent(&mut self) -> Agent {
        let is_individual = self.coin();
        Agent {
            is_individual,
            first_name: self.first_name(),
            last_name: self.last_name(),
            company_name: if is_individual {
                String::new()
            } else {
                self.company_name()
            },
            address: self.address(),
        }
    }

    pub fn organizer(&mut self) -> Organizer {
        let is_individual = self.coin();
        let first_name = self.first_name();
        let last_name = self.last_name();
        let middle_name = if self.coin() {
            Some(self.first_name())
        } else {
            None
        };
        let company_name = if is_individual {
            None
        } else {
            Some(self.company_name())
        };
        let address = self.address();

        Organizer {
            is_individual,
            first_name,
            last_name,
            middle_name,
            company_name,
            email: self.email(),
            phone: self.phone_number(),
            address_street: address.street,
            address_extra: address.extra,
            address_state: address.state,
            address_city: address.city,
            address_zip_code: address.zip_code,
            address_country: "US".to_string(),
            address_county: address.county,
        }
    }

    pub fn entity_data(&mut self) -> EntityData {
        let members_count = self.rng.random_range(1..=5);
        let members = (0..members_count).map(|_| self.member()).collect();

        EntityData {
            entity_type: self.pick(ENTITY_TYPES).to_string(),
            entity_state: self.state_abbr(),
            activity_type: self.pick(ACTIVITY_TYPES).to_string(),
            naics_code: self.rng.random_range(100_000..=999_999),
            company: self.company(),
            contact: self.contact(),
            is_manager_managed: self.coin(),
            members,
            agent: self.agent(),
            organizer: self.organizer(),
        }
    }

    /// Entity data in the untyped form carried by `CreateOperation::data`
    pub fn entity_data_map(
        &mut self,
    ) -> serde_json::Result<serde_json::Map<String, serde_json::Value>> {
        match serde_json::to_value(self.entity_data())? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde_json::Error::custom(format!(
                "entity data serialized to a non-object: {other}"
            ))),
        }
    }

    pub fn credentials(&mut self) -> Credentials {
        let first = self.pick(FIRST_NAMES).to_lowercase();
        let last = self.pick(LAST_NAMES).to_lowercase();
        let username = format!("{first}_{last}{}", self.digits(2));
        let password = (0..PASSWORD_LENGTH)
            .map(|_| {
                let idx = self.rng.random_range(0..PASSWORD_CHARSET.len());
                char::from(PASSWORD_CHARSET[idx])
            })
            .collect();

        Credentials { username, password }
    }

    /// A complete create request for `state` with fake credentials and data
    pub fn operation_request(&mut self, state: State) -> serde_json::Result<CreateOperation> {
        let credentials = self.credentials();
        let data = self.entity_data_map()?;
        Ok(CreateOperation::new(state, Some(credentials), data))
    }
}
