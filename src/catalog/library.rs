//! Hand-authored destination data backing [`Catalog::builtin`].
//!
//! [`Catalog::builtin`]: super::Catalog::builtin

use super::{BookingOptionTemplate, DayTemplate, DestinationTemplate};
use crate::types::{BookingKind, BudgetLevel, Climate, TravelCompanion};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn offer(
    kind: BookingKind,
    name: &str,
    description: &str,
    booking_url: &str,
) -> BookingOptionTemplate {
    BookingOptionTemplate {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        booking_url: booking_url.to_string(),
    }
}

fn day(title: &str, description: &str) -> DayTemplate {
    DayTemplate {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Catalog order matters: it breaks score ties and drives the
/// alternating nightly surcharge.
pub(super) fn destination_library() -> Vec<DestinationTemplate> {
    vec![
        DestinationTemplate {
            destination: "Kyoto".to_string(),
            country: "Japan".to_string(),
            summary: "A tranquil blend of ancient temples, tea houses, and vibrant local culture surrounded by mountains and lush gardens."
                .to_string(),
            highlights: strings(&[
                "Sunrise meditation at ancient temples",
                "Private tea ceremony in Gion",
                "Arashiyama bamboo forest walk",
            ]),
            ideal_for: vec![TravelCompanion::Couple, TravelCompanion::Solo, TravelCompanion::Family],
            climates: vec![Climate::Temperate],
            budget: BudgetLevel::Midrange,
            activities: strings(&["culture", "history", "food", "nature", "wellness", "photography"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "Hoshinoya Kyoto",
                    "Riverside ryokan with private boat transfer and kaiseki.",
                    "https://hoshinoyakyoto.com",
                ),
                offer(
                    BookingKind::Experience,
                    "Private Tea Ceremony",
                    "Guided by a tea master in Gion with kimono fitting option.",
                    "https://teaceremonykyoto.com",
                ),
                offer(
                    BookingKind::Tour,
                    "Arashiyama Day Tour",
                    "Tailored guide through bamboo grove and hidden temples.",
                    "https://kyotoprivateguide.jp",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "Historic Northern Kyoto",
                    "Kinkaku-ji, Ryoan-ji rock garden, and Kaiseki dinner in Pontocho.",
                ),
                day(
                    "Arashiyama Serenity",
                    "Bamboo grove at dawn, river boat ride, Tenryu-ji temple gardens.",
                ),
                day(
                    "Gion Cultural Immersion",
                    "Tea ceremony, traditional crafts workshop, evening geisha district stroll.",
                ),
            ],
            travel_tips: strings(&[
                "Reserve popular restaurants and tea ceremonies 4-6 weeks ahead.",
                "Purchase the Kyoto City Bus & Subway pass for easy transport.",
                "Pack layers; evenings can be cool even in spring and autumn.",
            ]),
            recommended_season: "March-May and October-November for mild weather and foliage."
                .to_string(),
            local_cuisine: strings(&["kaiseki", "yudofu", "matcha sweets", "obanzai"]),
            tags: strings(&["zen", "gardens", "spiritual", "culinary"]),
        },
        DestinationTemplate {
            destination: "Lisbon & Sintra".to_string(),
            country: "Portugal".to_string(),
            summary: "Sun-soaked coastal capital with vibrant neighborhoods partnered with fairy-tale palaces in nearby Sintra."
                .to_string(),
            highlights: strings(&[
                "Fado music evening in Alfama",
                "Sunset sail on the Tagus River",
                "Peña Palace and Quinta da Regaleira exploration",
            ]),
            ideal_for: vec![TravelCompanion::Friends, TravelCompanion::Couple, TravelCompanion::Solo, TravelCompanion::Family],
            climates: vec![Climate::Coastal, Climate::Temperate],
            budget: BudgetLevel::Budget,
            activities: strings(&["food", "nightlife", "history", "architecture", "outdoors"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "The Lumiares Hotel & Spa",
                    "Boutique apartments in Bairro Alto with rooftop views and spa access.",
                    "https://thelumiares.com",
                ),
                offer(
                    BookingKind::Experience,
                    "Sunset Sailing Cruise",
                    "Small-group sail with local wine and narration of Lisbon’s maritime history.",
                    "https://lisbonsailing.com",
                ),
                offer(
                    BookingKind::Tour,
                    "Sintra by Locals",
                    "Day trip with skip-the-line palace access and gourmet picnic in the forests.",
                    "https://sintralocals.pt",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "Lisbon Neighborhoods",
                    "Tram 28 ride, Time Out Market tasting session, and Alfama sunset viewpoints.",
                ),
                day(
                    "Sintra and Cascais",
                    "Explore Pena Palace, Moorish Castle, and relax on Guincho Beach before seafood dinner.",
                ),
                day(
                    "Gastronomy & Culture",
                    "Pastel de nata workshop, LX Factory creatives tour, Fado dinner club.",
                ),
            ],
            travel_tips: strings(&[
                "Use Viva Viagem card for public transport; recharge as needed.",
                "Wear comfortable shoes—Lisbon’s hills feature plenty of cobblestones.",
                "Sintra mornings are cooler; bring a light jacket.",
            ]),
            recommended_season: "April-June or September for warm weather without peak crowds."
                .to_string(),
            local_cuisine: strings(&["pastel de nata", "bacalhau", "sardines", "ginjinha"]),
            tags: strings(&["sunset", "culture", "budget-friendly", "music"]),
        },
        DestinationTemplate {
            destination: "Queenstown".to_string(),
            country: "New Zealand".to_string(),
            summary: "Adventure capital framed by alpine lakes—perfect for adrenaline seekers and scenic escapes alike."
                .to_string(),
            highlights: strings(&[
                "Helicopter glacier landing",
                "Milford Sound cruise",
                "Central Otago wine tasting",
            ]),
            ideal_for: vec![TravelCompanion::Friends, TravelCompanion::Group, TravelCompanion::Couple, TravelCompanion::Family],
            climates: vec![Climate::Mountainous, Climate::Temperate],
            budget: BudgetLevel::Luxury,
            activities: strings(&["adventure", "hiking", "water", "wine", "scenery"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "Matakauri Lodge",
                    "Luxury lakefront suites with spa, private decks, and curated adventure concierge.",
                    "https://matakaurilodge.com",
                ),
                offer(
                    BookingKind::Experience,
                    "Milford Sound Scenic Flight + Cruise",
                    "Fly-cruise-fly itinerary over Fiordland with naturalist commentary.",
                    "https://milfordsoundflights.co.nz",
                ),
                offer(
                    BookingKind::Tour,
                    "Central Otago Wine Trail",
                    "Private guide through boutique vineyards with gourmet lunch pairing.",
                    "https://queenstownwinetrail.co.nz",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "Lake Wakatipu Adventure",
                    "Jet boating, Skyline gondola, and farm-to-table dining overlooking the Remarkables.",
                ),
                day(
                    "Fiordland Expedition",
                    "Scenic flight to Milford Sound, catamaran cruise, and guided rainforest walk.",
                ),
                day(
                    "Wine & Wellness",
                    "Spa morning, private wine tastings, sunset cruise with local chef tasting menu.",
                ),
            ],
            travel_tips: strings(&[
                "Layer clothing—weather shifts quickly in alpine climates.",
                "Book adventure activities at least 2 weeks out in peak season.",
                "Consider renting a car for winery visits; left-side driving applies.",
            ]),
            recommended_season: "November-April for warmer weather; June-August for skiing."
                .to_string(),
            local_cuisine: strings(&["lamb", "green-lipped mussels", "pinot noir", "pavlova"]),
            tags: strings(&["adventure", "luxury", "wine", "nature"]),
        },
        DestinationTemplate {
            destination: "Tulum".to_string(),
            country: "Mexico".to_string(),
            summary: "Bohemian Caribbean escape featuring eco-chic stays, Mayan ruins, and cenote adventures."
                .to_string(),
            highlights: strings(&[
                "Guided sunrise visit to Tulum ruins",
                "Swimming in Gran Cenote",
                "Chef-led jungle dining experience",
            ]),
            ideal_for: vec![TravelCompanion::Couple, TravelCompanion::Friends, TravelCompanion::Group],
            climates: vec![Climate::Tropical, Climate::Coastal],
            budget: BudgetLevel::Midrange,
            activities: strings(&["beach", "wellness", "food", "culture", "nightlife", "diving"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "La Valise Tulum",
                    "Eco-conscious boutique hotel with beach beds and personalized wellness programs.",
                    "https://lavalisetulum.com",
                ),
                offer(
                    BookingKind::Experience,
                    "Cenote Exploration",
                    "Private guide through lesser-known cenotes with underwater photography.",
                    "https://tulumcenotes.com",
                ),
                offer(
                    BookingKind::Tour,
                    "Sian Ka’an Biosphere Safari",
                    "Protected reserve boat tour spotting dolphins, turtles, and manatees.",
                    "https://siankaancommunitytours.com",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "Beach & Wellness",
                    "Sunrise yoga, beach club afternoon, sunset sound bath with local healer.",
                ),
                day(
                    "Cenotes & Culture",
                    "Gran Cenote swim, Mayan workshop, jungle dinner at Hartwood.",
                ),
                day(
                    "Biosphere Adventure",
                    "Sian Ka’an boating, snorkeling on coral reef, nightlife in downtown Tulum.",
                ),
            ],
            travel_tips: strings(&[
                "Pack biodegradable sunscreen; standard sunscreen is banned in cenotes.",
                "Carry pesos for taxis and small vendors; ATMs can be limited.",
                "Reserve popular restaurants a week before arrival.",
            ]),
            recommended_season: "November-April for dry season; avoid September/October storms."
                .to_string(),
            local_cuisine: strings(&["cochinita pibil", "ceviche", "aguachile", "mezcal cocktails"]),
            tags: strings(&["wellness", "beach", "eco", "gastronomy"]),
        },
        DestinationTemplate {
            destination: "Reykjavík & South Coast".to_string(),
            country: "Iceland".to_string(),
            summary: "Nordic capital with geothermal spas and dramatic landscapes including waterfalls, glaciers, and black-sand beaches."
                .to_string(),
            highlights: strings(&[
                "Blue Lagoon retreat experience",
                "Northern Lights super-jeep hunt",
                "Glacier hike on Sólheimajökull",
            ]),
            ideal_for: vec![TravelCompanion::Friends, TravelCompanion::Family, TravelCompanion::Group, TravelCompanion::Solo],
            climates: vec![Climate::Cold, Climate::Coastal],
            budget: BudgetLevel::Luxury,
            activities: strings(&["nature", "adventure", "photography", "wellness", "wildlife"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "The Reykjavik EDITION",
                    "Design-forward stay with private geothermal experiences and harbor views.",
                    "https://editionhotels.com/reykjavik",
                ),
                offer(
                    BookingKind::Tour,
                    "South Coast Super Jeep",
                    "Private expedition to waterfalls, ice beach, and glacier walk with safety gear.",
                    "https://icelandluxurytours.is",
                ),
                offer(
                    BookingKind::Experience,
                    "Northern Lights Retreat",
                    "Aurora viewing with astrophotographer and hot gourmet beverages.",
                    "https://northernlights.is",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "City & Culinary",
                    "Reykjavík city walk, Icelandic lamb tasting, evening geothermal spa relaxation.",
                ),
                day(
                    "South Coast Wonders",
                    "Seljalandsfoss waterfall, black sand beaches, glacier hike with expert guide.",
                ),
                day(
                    "Arctic Adventure",
                    "Golden Circle highlights, snowmobiling on Langjökull, aurora chase at night.",
                ),
            ],
            travel_tips: strings(&[
                "Weather changes rapidly; pack thermal layers and waterproof outerwear.",
                "Book Blue Lagoon and premium restaurants well in advance.",
                "Driving conditions can be challenging in winter—consider private transfers.",
            ]),
            recommended_season: "February-April for aurora and snowy landscapes; June-August for midnight sun."
                .to_string(),
            local_cuisine: strings(&["Icelandic lamb", "skyr", "langoustine", "rye bread"]),
            tags: strings(&["northern lights", "geothermal", "photography", "adventure"]),
        },
        DestinationTemplate {
            destination: "Cape Town & Winelands".to_string(),
            country: "South Africa".to_string(),
            summary: "Iconic Table Mountain views, vibrant neighborhoods, and world-class vineyards within a short drive."
                .to_string(),
            highlights: strings(&[
                "Table Mountain sunrise hike",
                "Private safari at Aquila Game Reserve",
                "Franschhoek wine tram exploration",
            ]),
            ideal_for: vec![TravelCompanion::Friends, TravelCompanion::Couple, TravelCompanion::Family, TravelCompanion::Group],
            climates: vec![Climate::Coastal, Climate::Temperate],
            budget: BudgetLevel::Midrange,
            activities: strings(&["wildlife", "wine", "food", "hiking", "culture"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "One&Only Cape Town",
                    "Waterfront resort with Table Mountain views and Nobu restaurant on-site.",
                    "https://oneandonlyresorts.com/cape-town",
                ),
                offer(
                    BookingKind::Tour,
                    "Cape Peninsula Adventure",
                    "Private guide for penguin colony, Cape Point, and Chapman’s Peak drive.",
                    "https://capetownprivatetours.co.za",
                ),
                offer(
                    BookingKind::Experience,
                    "Franschhoek Wine Tram",
                    "Open-air tram through storied vineyards with cellar tastings and gourmet lunch.",
                    "https://winetram.co.za",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "City & Coast",
                    "Table Mountain cableway, V&A Waterfront, sunset at Camps Bay.",
                ),
                day(
                    "Winelands Discovery",
                    "Franschhoek tram, Stellenbosch pairings, evening fine-dining chef’s table.",
                ),
                day(
                    "Wildlife & Culture",
                    "Cape Peninsula drive, penguin colony visit, township arts tour.",
                ),
            ],
            travel_tips: strings(&[
                "Uber works well in the city; arrange private drivers for the Winelands.",
                "Secure safari and Cape Peninsula guides 3-4 weeks in advance.",
                "Spring (Sept-Nov) offers wildflowers; summer brings warm beach days.",
            ]),
            recommended_season: "September-November or March-May for mild weather."
                .to_string(),
            local_cuisine: strings(&["braai", "bobotie", "cape malay curry", "chenin blanc"]),
            tags: strings(&["safari", "wine", "culinary", "scenic"]),
        },
        DestinationTemplate {
            destination: "Dubrovnik & Dalmatian Coast".to_string(),
            country: "Croatia".to_string(),
            summary: "Walled seaside city with Adriatic views, island hopping, and Mediterranean cuisine."
                .to_string(),
            highlights: strings(&[
                "Old Town private walking tour",
                "Elaphiti Islands yacht day",
                "Pelješac Peninsula wine tasting",
            ]),
            ideal_for: vec![TravelCompanion::Couple, TravelCompanion::Friends, TravelCompanion::Family],
            climates: vec![Climate::Coastal, Climate::Temperate],
            budget: BudgetLevel::Midrange,
            activities: strings(&["history", "sailing", "food", "wine", "relaxation"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "Hotel Excelsior Dubrovnik",
                    "Seaside hotel steps from the Old Town with spa and private beach platform.",
                    "https://excelsior-dubrovnik.com",
                ),
                offer(
                    BookingKind::Tour,
                    "Old Town Cultural Stroll",
                    "Historian-led walk covering Game of Thrones filming spots and hidden monasteries.",
                    "https://dubrovnikwalks.com",
                ),
                offer(
                    BookingKind::Experience,
                    "Elaphiti Yacht Charter",
                    "Skippered yacht visiting Lopud, Sipan, and secluded coves with onboard lunch.",
                    "https://adriaticyacht.com",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "Walled City & Gastronomy",
                    "City walls walk, seafood lunch, sunset cocktails at Buža bar.",
                ),
                day(
                    "Island Yachting",
                    "Full-day yacht charter, kayaking in hidden coves, cliffside dinner back in town.",
                ),
                day(
                    "Wine & Countryside",
                    "Pelješac wineries, oyster farm visit, evening fortress cable car ride.",
                ),
            ],
            travel_tips: strings(&[
                "Book yacht charters early in summer; they sell out quickly.",
                "Carry comfortable sandals for Old Town’s polished stone streets.",
                "Use the Dubrovnik pass for attractions and public transport savings.",
            ]),
            recommended_season: "May-June or September for warm seas and fewer crowds."
                .to_string(),
            local_cuisine: strings(&["dalmatian seafood", "black risotto", "oysters", "plavac mali wine"]),
            tags: strings(&["sailing", "culinary", "romantic", "history"]),
        },
        DestinationTemplate {
            destination: "Banff & Lake Louise".to_string(),
            country: "Canada".to_string(),
            summary: "Iconic Canadian Rockies road trip with turquoise lakes, glacier-fed rivers, and alpine wildlife."
                .to_string(),
            highlights: strings(&[
                "Sunrise canoe on Lake Louise",
                "Icefields Parkway guided drive",
                "Banff Upper Hot Springs soak",
            ]),
            ideal_for: vec![TravelCompanion::Family, TravelCompanion::Friends, TravelCompanion::Group, TravelCompanion::Solo],
            climates: vec![Climate::Mountainous, Climate::Cold],
            budget: BudgetLevel::Midrange,
            activities: strings(&["hiking", "wildlife", "photography", "wellness", "scenic drives"]),
            booking_options: vec![
                offer(
                    BookingKind::Hotel,
                    "Fairmont Chateau Lake Louise",
                    "Historic chateau with lakeside rooms, paddle rentals, and alpine guides desk.",
                    "https://fairmont.com/lake-louise",
                ),
                offer(
                    BookingKind::Experience,
                    "Columbia Icefield Adventure",
                    "Glacier explorer vehicle trip plus glass-floored Skywalk admission.",
                    "https://icefields.com",
                ),
                offer(
                    BookingKind::Tour,
                    "Sunrise Wildlife Safari",
                    "Naturalist-led small group to spot elk, bears, and big horn sheep safely.",
                    "https://banfftours.com",
                ),
            ],
            sample_itinerary: vec![
                day(
                    "Banff & Bow Valley",
                    "Banff gondola, Johnston Canyon hike, evening at historic Banff Springs.",
                ),
                day(
                    "Lakes & Glaciers",
                    "Lake Louise canoe, Moraine Lake photography, glacier viewpoints.",
                ),
                day(
                    "Icefields Parkway",
                    "Scenic drive with stops at Peyto Lake, Athabasca Glacier, and Mistaya Canyon.",
                ),
            ],
            travel_tips: strings(&[
                "Park shuttle reservations are required for Moraine Lake in peak season.",
                "Carry bear spray while hiking and know how to use it.",
                "Dress in layers; mountain weather swings widely.",
            ]),
            recommended_season: "June-September for open trails; December-March for skiing."
                .to_string(),
            local_cuisine: strings(&["alberta beef", "maple treats", "craft beer", "wild game"]),
            tags: strings(&["outdoors", "family-friendly", "road trip", "photography"]),
        },
    ]
}
