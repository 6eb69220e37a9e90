//! The fixed instruction template sent to the model.
//!
//! Rendering is pure and total: the three option labels are substituted
//! positionally into a constant template that enumerates every record field
//! with a format hint and pins the reply to an exact-key JSON object.

use crate::options::GenerationOptions;

/// Everything after the three substituted parameters: the field list with
/// format hints, the exact-key JSON skeleton, and the consistency instruction.
const REQUIREMENTS: &str = r#"Please provide a realistic fake identity with ALL of the following details in a structured format:

1. Full name (first, middle initial, last)
2. Complete address (street, city, state/province, postal code)
3. Phone number (formatted for the country)
4. Email address
5. Birthday (month day, year format)
6. Age in years
7. Social Security Number or equivalent (with XXXs for privacy, like 123-45-XXXX)
8. Mother's maiden name
9. Geographic coordinates (latitude, longitude)
10. Zodiac sign
11. Username (creative online handle)
12. Password (secure but fake)
13. Website domain
14. Credit card number (fake, use standard format like 5555 1234 5678 9012)
15. Credit card expiration (MM/YYYY format)
16. Credit card CVC (3 digits)
17. Company name
18. Occupation/job title
19. Height (feet and inches with centimeters)
20. Weight (pounds with kilograms)
21. Blood type
22. Favorite color
23. Vehicle (year make model)
24. UPS tracking number (fake but realistic format)
25. GUID (standard UUID format)

Please format your response as a JSON object with these exact keys:
{
  "name": "",
  "address": "",
  "phone": "",
  "email": "",
  "birthday": "",
  "age": "",
  "ssn": "",
  "mothersMaidenName": "",
  "geoCoordinates": "",
  "zodiac": "",
  "username": "",
  "password": "",
  "website": "",
  "creditCard": "",
  "creditCardExpires": "",
  "creditCardCvc": "",
  "company": "",
  "occupation": "",
  "height": "",
  "weight": "",
  "bloodType": "",
  "favoriteColor": "",
  "vehicle": "",
  "trackingNumber": "",
  "guid": ""
}

Make sure all data is completely fictional and appropriate for the specified gender, name origin, and country. Ensure the data is internally consistent (e.g., address matches country, phone format matches country, etc.)."#;

/// Render the instruction for one set of options. Cannot fail.
pub fn render(options: &GenerationOptions) -> String {
    format!(
        "Generate a completely fake identity for testing purposes with the following specifications:\n\
         - Gender: {gender}\n\
         - Name origin/set: {name_set}\n\
         - Country: {country}\n\
         \n\
         {REQUIREMENTS}",
        gender = options.gender,
        name_set = options.name_set,
        country = options.country,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Country, Gender, NameSet};
    use crate::record::EXPECTED_KEYS;

    #[test]
    fn every_expected_key_is_enumerated() {
        let prompt = render(&GenerationOptions::default());
        for key in EXPECTED_KEYS {
            assert!(prompt.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }

    #[test]
    fn labels_are_substituted_verbatim_for_all_combinations() {
        for gender in Gender::ALL {
            for name_set in NameSet::ALL {
                for country in Country::ALL {
                    let options = GenerationOptions {
                        gender: *gender,
                        name_set: *name_set,
                        country: *country,
                    };
                    let prompt = render(&options);
                    assert!(prompt.contains(&format!("- Gender: {}", gender.label())));
                    assert!(prompt.contains(&format!("- Name origin/set: {}", name_set.label())));
                    assert!(prompt.contains(&format!("- Country: {}", country.label())));
                }
            }
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let options = GenerationOptions {
            gender: Gender::Female,
            name_set: NameSet::Hobbit,
            country: Country::NewZealand,
        };
        assert_eq!(render(&options), render(&options));
    }
}
