// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Place lists for the quick country search and the heat-map export.
//!
//! The quick search tests these names against the words of each line, so a
//! multi-word country such as "Costa Rica" only matches when the alias table
//! produces it as a single entry.

/// Countries (and a few well-known regions) for the quick search.
pub const PREDEFINED_COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Alaska",
    "Albania",
    "Algeria",
    "Angola",
    "Andorra",
    "Armenia",
    "Argentina",
    "Aruba",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bahrain",
    "Belarus",
    "Belgium",
    "Belize",
    "Benin",
    "Bosnia",
    "Botswana",
    "Brazil",
    "Bulgaria",
    "Burkina Faso",
    "Burma",
    "Burundi",
    "Cambodia",
    "Cameroon",
    "Canada",
    "Central African Republic",
    "Chad",
    "Chile",
    "China",
    "Colombia",
    "Congo",
    "Costa Rica",
    "Croatia",
    "Cyprus",
    "Czech",
    "Denmark",
    "Ecuador",
    "Egypt",
    "El Salvador",
    "England",
    "Equatorial Guinea",
    "Eritrea",
    "Estonia",
    "Ethiopia",
    "Finland",
    "France",
    "Gabon",
    "Gambia",
    "Georgia",
    "Germany",
    "Ghana",
    "Greece",
    "Greenland",
    "Guinea",
    "Guinea-Bissau",
    "Guyana",
    "Guatemala",
    "Cuba",
    "Djibouti",
    "Haiti",
    "Honduras",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Iran",
    "Iraq",
    "Ireland",
    "Israel",
    "Italy",
    "Ivory Coast",
    "Jamaica",
    "Japan",
    "Jordan",
    "Kazakhstan",
    "Kenya",
    "Korea",
    "Kuwait",
    "Kyrgyzstan",
    "Laos",
    "Latvia",
    "Lebanon",
    "Liberia",
    "Lithuania",
    "Libya",
    "Liechtenstein",
    "Luxembourg",
    "Macedonia",
    "Madagascar",
    "Malawi",
    "Malaysia",
    "Mali",
    "Malta",
    "Mauritania",
    "Mexico",
    "Moldova",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Morocco",
    "Mozambique",
    "Namibia",
    "Netherlands",
    "New Zealand",
    "Nicaragua",
    "Niger",
    "Nigeria",
    "Norway",
    "Oman",
    "Pakistan",
    "Palau",
    "Panama",
    "Papua New Guinea",
    "Paraguay",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Qatar",
    "Romania",
    "Rwanda",
    "San Marino",
    "Saudi Arabia",
    "Scotland",
    "Russia",
    "Senegal",
    "Serbia",
    "Sierra Leone",
    "Slovakia",
    "Slovenia",
    "Somalia",
    "South Africa",
    "Spain",
    "Sudan",
    "Suriname",
    "Swaziland",
    "Sweden",
    "Switzerland",
    "Syria",
    "Taiwan",
    "Tajikstan",
    "Tanzania",
    "Tbilisi",
    "Thailand",
    "Togo",
    "Tunisia",
    "Turkey",
    "Turkmenistan",
    "Uganda",
    "United Arab Emirates",
    "Ukraine",
    "Uruguay",
    "USA",
    "US",
    "Uzbekistan",
    "Venezuela",
    "Vietnam",
    "Yemen",
    "Zambia",
    "Zimbabwe",
];

/// US states for the heat-map export.
///
/// Georgia is listed as "Georgia USA", the alias table's name for the state.
pub const US_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia USA",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Places written to the heat-map CSV: the given countries plus the US
/// states, with "US" and "USA" replaced by the states themselves.
///
/// Order is preserved and duplicates are removed.
pub fn heat_map_locations<'a, I>(countries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut places: Vec<&'a str> = Vec::new();
    for place in countries.into_iter().chain(US_STATES.iter().copied()) {
        if place.eq_ignore_ascii_case("us") || place.eq_ignore_ascii_case("usa") {
            continue;
        }
        if !places.contains(&place) {
            places.push(place);
        }
    }
    places
}
