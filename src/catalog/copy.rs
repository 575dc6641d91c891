//! Display copy for generated activities.
//!
//! Family variants are picked from the group composition so a family never
//! gets "Local Pub Crawl" even when pubs survive the suitability filter.

use crate::models::{activity::ActivityCategory, traveler::GroupComposition};

pub fn activity_names(
    category: ActivityCategory,
    destination: &str,
    group: &GroupComposition,
) -> Vec<String> {
    let kids = group.has_children;
    let names: [&str; 3] = match category {
        ActivityCategory::Hotel => ["Relaxation at Hotel", "Hotel Amenities", "Spa & Wellness"],
        ActivityCategory::BedAndBreakfast => ["B&B Breakfast", "Cottage Rest", "Homely Stay"],
        ActivityCategory::Hostel => {
            ["Hostel Social Hour", "Backpackers Meet", "Community Lounge"]
        }
        ActivityCategory::Culture if kids => {
            return vec![
                format!("Family Visit to {} Museum", destination),
                "Interactive Cultural Center".to_string(),
                "Kid-friendly Heritage Site".to_string(),
            ]
        }
        ActivityCategory::Culture => {
            return vec![
                format!("{} Museum Visit", destination),
                "Cultural Center Tour".to_string(),
                "Heritage Site Exploration".to_string(),
            ]
        }
        ActivityCategory::Concert if kids => [
            "Family Concert",
            "Children's Musical Show",
            "Family Entertainment",
        ],
        ActivityCategory::Concert => ["Live Music Show", "Evening Concert", "Musical Performance"],
        ActivityCategory::Archeology if kids => [
            "Family Archaeological Discovery",
            "Interactive History Tour",
            "Ancient Sites for Families",
        ],
        ActivityCategory::Archeology => [
            "Ancient Ruins Tour",
            "Archaeological Dig",
            "Historical Site Visit",
        ],
        ActivityCategory::Hiking if kids => [
            "Family Nature Walk",
            "Easy Trail for Families",
            "Kid-friendly Nature Exploration",
        ],
        ActivityCategory::Hiking => ["Nature Trail Hike", "Mountain Exploration", "Scenic Trail Walk"],
        ActivityCategory::Cycling if kids => [
            "Family Bike Ride",
            "Easy Cycling Path",
            "Bike Tour for Families",
        ],
        ActivityCategory::Cycling => ["Bike Tour", "Cycling Adventure", "City Bike Exploration"],
        ActivityCategory::Car => ["Scenic Drive", "Road Trip", "Countryside Drive"],
        ActivityCategory::Motorbike => ["Motorbike Adventure", "Scooter Tour", "Bike Rental"],
        ActivityCategory::Swimming if group.has_young_children => [
            "Family Pool Time",
            "Shallow Water Swimming",
            "Kids Swimming Area",
        ],
        ActivityCategory::Swimming if kids => [
            "Family Beach Day",
            "Family Pool Activity",
            "Swimming for All Ages",
        ],
        ActivityCategory::Swimming => ["Beach Swim", "Pool Time", "Ocean Dip"],
        ActivityCategory::WaterSports if kids => [
            "Family Water Activities",
            "Gentle Water Sports",
            "Water Fun for Families",
        ],
        ActivityCategory::WaterSports => ["Kayaking Adventure", "Paddle Boarding", "Jet Ski Rental"],
        ActivityCategory::SeaCruise if kids => [
            "Family Boat Trip",
            "Family-friendly Cruise",
            "Scenic Boat Tour for All",
        ],
        ActivityCategory::SeaCruise => ["Harbor Cruise", "Sunset Boat Tour", "Island Hopping Trip"],
        ActivityCategory::Workshop if kids => [
            "Family Craft Workshop",
            "Kids & Parents Workshop",
            "Family Art Activity",
        ],
        ActivityCategory::Workshop => ["Local Craft Workshop", "Cooking Class", "Art Workshop"],
        ActivityCategory::Dining if kids => [
            "Family Restaurant Experience",
            "Kid-friendly Dining",
            "Family Meal Out",
        ],
        ActivityCategory::Dining => ["Local Cuisine Experience", "Gourmet Dinner", "Food Tasting"],
        ActivityCategory::Partying => [
            "Family Entertainment",
            "Evening Activities",
            "Local Festivities",
        ],
        ActivityCategory::Pubs if kids => [
            "Family Restaurant",
            "Casual Family Dining",
            "Local Eatery",
        ],
        ActivityCategory::Pubs => ["Local Pub Crawl", "Craft Beer Tasting", "Evening at Irish Pub"],
        ActivityCategory::Gallery if kids => [
            "Interactive Art Gallery",
            "Family Art Experience",
            "Art Gallery for All Ages",
        ],
        ActivityCategory::Gallery => ["Art Gallery Visit", "Photography Exhibition", "Modern Art Tour"],
        ActivityCategory::Networking if kids => [
            "Family Community Event",
            "Local Family Gathering",
            "Community Activities",
        ],
        ActivityCategory::Networking => ["Local Meetup", "Travel Community Event", "Social Gathering"],
    };

    names.iter().map(|name| name.to_string()).collect()
}

pub fn activity_descriptions(
    category: ActivityCategory,
    destination: &str,
    group: &GroupComposition,
) -> Vec<String> {
    let kids = group.has_children;
    let descriptions: [&str; 3] = match category {
        ActivityCategory::Hotel => [
            "Enjoy some downtime at your accommodation with all amenities at your disposal.",
            "Take advantage of your hotel's facilities to rest and recharge.",
            "Relax and unwind at your accommodation before your next adventure.",
        ],
        ActivityCategory::BedAndBreakfast => [
            "Experience the charm and comfort of your B&B with personalized service.",
            "Enjoy the homely atmosphere and local insights from your B&B hosts.",
            "Take time to appreciate the unique character of your bed and breakfast.",
        ],
        ActivityCategory::Hostel => [
            "Connect with fellow travelers in the communal spaces of your hostel.",
            "Join in social activities organized by your hostel.",
            "Use the hostel's facilities and meet new friends from around the world.",
        ],
        ActivityCategory::Culture if kids => {
            return vec![
                format!(
                    "Explore {}'s rich cultural heritage with interactive exhibits perfect for families.",
                    destination
                ),
                "Immerse your family in local history and traditions at this family-friendly cultural venue.".to_string(),
                "Gain insights into the region's cultural significance with hands-on displays kids will love.".to_string(),
            ]
        }
        ActivityCategory::Culture => {
            return vec![
                format!(
                    "Explore {}'s rich cultural heritage through exhibits and guided tours.",
                    destination
                ),
                "Immerse yourself in local history and traditions at this cultural venue.".to_string(),
                "Gain insights into the region's cultural significance with informative displays.".to_string(),
            ]
        }
        ActivityCategory::Concert if kids => [
            "Experience family-friendly live music in a welcoming venue suitable for all ages.",
            "Enjoy an afternoon of musical entertainment designed for families.",
            "Listen to performances that capture the essence of local culture in a family setting.",
        ],
        ActivityCategory::Concert => [
            "Experience live music in a vibrant venue showcasing local or international talent.",
            "Enjoy an evening of musical entertainment in an atmospheric setting.",
            "Listen to performances that capture the essence of the local music scene.",
        ],
        ActivityCategory::Archeology if kids => [
            "Step back in time as your family explores ancient ruins with engaging, educational activities.",
            "Discover the historical significance of this site through family-friendly guided tours.",
            "Learn about ancient civilizations through interactive displays and kid-friendly explanations.",
        ],
        ActivityCategory::Archeology => [
            "Step back in time as you explore ancient ruins and archaeological treasures.",
            "Discover the historical significance of this well-preserved archaeological site.",
            "Learn about ancient civilizations through expert guides and informative displays.",
        ],
        ActivityCategory::Hiking if kids => [
            "Take a gentle family walk through beautiful natural landscapes with easy trails.",
            "Follow well-marked, family-friendly paths through diverse terrain and scenic vistas.",
            "Connect with nature on this easy hiking experience perfect for families.",
        ],
        ActivityCategory::Hiking => [
            "Trek through beautiful natural landscapes with breathtaking views.",
            "Follow well-marked trails through diverse terrain and scenic vistas.",
            "Connect with nature on this rejuvenating hiking experience.",
        ],
        ActivityCategory::Cycling if kids => [
            "Explore the region on family bikes, covering scenic routes at a comfortable pace.",
            "Pedal through easy routes specially selected for families with children.",
            "Enjoy the freedom of family cycling through safe, picturesque landscapes.",
        ],
        ActivityCategory::Cycling => [
            "Explore the region on two wheels, covering more ground than on foot.",
            "Pedal through scenic routes specially selected for cyclists of all levels.",
            "Enjoy the freedom of cycling through picturesque landscapes and hidden gems.",
        ],
        ActivityCategory::Car => [
            "Take control of your sightseeing with a flexible self-drive experience.",
            "Enjoy the convenience of your own vehicle to explore off-the-beaten-path locations.",
            "Cover more ground with a rental car perfect for day trips and scenic drives.",
        ],
        ActivityCategory::Motorbike => [
            "Feel the thrill of exploring on a motorbike or scooter, perfect for navigating narrow streets.",
            "Enjoy the freedom and flexibility of having your own two-wheeled transport.",
            "Discover hidden corners of the region that are inaccessible to larger vehicles.",
        ],
        ActivityCategory::Swimming if kids => [
            "Cool off with a refreshing family swim in safe, supervised waters.",
            "Relax at a family-friendly beach or pool with amenities for children.",
            "Enjoy aquatic activities in a safe environment perfect for families.",
        ],
        ActivityCategory::Swimming => [
            "Cool off with a refreshing swim in crystal clear waters.",
            "Relax on the beach or by the pool with time for swimming at your leisure.",
            "Enjoy aquatic activities in a safe and scenic environment.",
        ],
        ActivityCategory::WaterSports if kids => [
            "Try gentle water-based activities suitable for families with supervision provided.",
            "Experience family-friendly water adventures with equipment sized for all ages.",
            "Enjoy safe water activities designed for families and beginners.",
        ],
        ActivityCategory::WaterSports => [
            "Get your adrenaline pumping with exciting water-based activities.",
            "Try your hand at popular water sports with equipment and instruction provided.",
            "Experience the thrill of water adventures suitable for all skill levels.",
        ],
        ActivityCategory::SeaCruise if kids => [
            "Set sail on a family-friendly boat journey with spectacular views and kid-friendly amenities.",
            "Cruise along the coastline with family facilities and activities for children.",
            "Enjoy a different perspective of the landscape from a comfortable, family-oriented boat.",
        ],
        ActivityCategory::SeaCruise => [
            "Set sail on a memorable boat journey with spectacular views from the water.",
            "Cruise along the coastline or to nearby islands with onboard amenities.",
            "Enjoy a different perspective of the landscape from the comfort of a boat.",
        ],
        ActivityCategory::Workshop if kids => [
            "Learn new skills together as a family from local experts in a hands-on environment.",
            "Create something unique for the whole family to take home as a trip memento.",
            "Immerse your family in local crafts and traditions through practical, fun experiences.",
        ],
        ActivityCategory::Workshop => [
            "Learn new skills from local experts in a hands-on workshop environment.",
            "Create something unique to take home as a memento of your trip.",
            "Immerse yourself in local crafts and traditions through practical experience.",
        ],
        ActivityCategory::Dining if kids => [
            "Savor family-friendly local cuisine in a welcoming restaurant with options for all ages.",
            "Indulge in regional specialties at a restaurant that caters to families.",
            "Experience the culinary highlights suitable for the whole family to enjoy.",
        ],
        ActivityCategory::Dining => [
            "Savor the flavors of local cuisine in a carefully selected restaurant.",
            "Indulge in regional specialties prepared with authentic recipes and fresh ingredients.",
            "Experience the culinary highlights of the destination with each carefully crafted dish.",
        ],
        ActivityCategory::Partying if kids => [
            "Experience family-friendly local entertainment with music and activities for all ages.",
            "Join in community festivities that welcome families and children.",
            "Enjoy an evening of family entertainment in a lively but appropriate atmosphere.",
        ],
        ActivityCategory::Partying => [
            "Experience the local nightlife scene with music, dancing, and entertainment.",
            "Join the festivities at popular venues where both locals and tourists gather.",
            "Enjoy an evening of fun and celebration in a vibrant atmosphere.",
        ],
        ActivityCategory::Pubs if kids => [
            "Visit family restaurants where you can sample local food in a welcoming environment.",
            "Experience local dining culture at establishments that welcome families.",
            "Relax in family-friendly venues that showcase local culinary traditions.",
        ],
        ActivityCategory::Pubs => [
            "Visit traditional pubs where you can sample local beverages and meet residents.",
            "Experience the authentic pub culture with a selection of drinks and casual atmosphere.",
            "Relax in characterful establishments that showcase local brewing traditions.",
        ],
        ActivityCategory::Gallery if kids => [
            "Appreciate artistic expressions through family-friendly exhibitions and interactive displays.",
            "Explore art in well-designed spaces with activities and programs for children.",
            "Gain cultural insights through creative works with explanations suitable for all ages.",
        ],
        ActivityCategory::Gallery => [
            "Appreciate artistic expressions through curated collections of visual arts.",
            "Explore contemporary or classical art in well-designed exhibition spaces.",
            "Gain cultural insights through the lens of creative works by local and international artists.",
        ],
        ActivityCategory::Networking if kids => [
            "Connect with local families and other travelers in a family-friendly social setting.",
            "Participate in community events designed for families to meet and interact.",
            "Exchange travel experiences with other families while kids can play together.",
        ],
        ActivityCategory::Networking => [
            "Connect with like-minded travelers and locals in a social setting.",
            "Participate in organized events designed to facilitate meaningful interactions.",
            "Exchange experiences and tips with others while making new connections.",
        ],
    };

    descriptions.iter().map(|text| text.to_string()).collect()
}

pub fn locations(destination: &str) -> Vec<String> {
    vec![
        format!("Downtown {}", destination),
        format!("{} Old Town", destination),
        format!("{} Marina", destination),
        format!("{} Cultural District", destination),
        format!("North {}", destination),
        format!("{} Park Area", destination),
        format!("{} Beach Front", destination),
        format!("Central {}", destination),
        format!("{} Historic Quarter", destination),
        format!("{} Shopping District", destination),
    ]
}

/// Names for on-demand cheaper offers; the n-th offer uses `n % 3`.
pub fn alternative_names(category: ActivityCategory) -> [&'static str; 3] {
    match category {
        ActivityCategory::Hotel => ["Budget Accommodation", "Shared Room Option", "Off-season Special"],
        ActivityCategory::BedAndBreakfast => ["Simple B&B Stay", "Room-only Option", "Weekly Rate Package"],
        ActivityCategory::Hostel => ["Dormitory Bed", "Shared Facilities Option", "Off-peak Booking"],
        ActivityCategory::Culture => ["Self-guided Tour", "Group Visit Discount", "Evening Admission Special"],
        ActivityCategory::Concert => ["Standing Room Ticket", "Preview Night Show", "Last-minute Booking"],
        ActivityCategory::Archeology => ["Group Tour Option", "Self-guided Exploration", "Off-peak Visit"],
        ActivityCategory::Hiking => ["Self-guided Trail", "Group Hike Discount", "Local Trail Alternative"],
        ActivityCategory::Cycling => ["Shared Bike Rental", "Short Route Option", "Group Cycling Discount"],
        ActivityCategory::Car => ["Economy Car Option", "Shared Ride Service", "Public Transport Alternative"],
        ActivityCategory::Motorbike => ["Smaller Scooter Rental", "Half-day Rental", "Group Discount"],
        ActivityCategory::Swimming => ["Public Beach Access", "Community Pool Option", "Off-peak Swimming"],
        ActivityCategory::WaterSports => ["Group Lesson Discount", "Equipment-only Rental", "Shore-based Alternative"],
        ActivityCategory::SeaCruise => ["Group Tour Discount", "Shorter Route Option", "Public Ferry Alternative"],
        ActivityCategory::Workshop => ["Group Class Discount", "Digital Workshop Option", "Materials-included Package"],
        ActivityCategory::Dining => ["Lunch Menu Special", "Local Eatery Alternative", "Early Bird Discount"],
        ActivityCategory::Partying => ["Early Admission Discount", "Weekday Special", "Local Venue Alternative"],
        ActivityCategory::Pubs => ["Happy Hour Timing", "Beer Flight Sampler", "Local Tavern Alternative"],
        ActivityCategory::Gallery => ["Free Exhibition Option", "Guided Group Tour", "Digital Experience"],
        ActivityCategory::Networking => ["Free Community Event", "Digital Meetup Option", "Local Gathering"],
    }
}

pub fn savings_descriptions(savings_percentage: u8) -> [String; 5] {
    [
        format!("Save {}% with this more affordable option that still provides a great experience.", savings_percentage),
        format!("A budget-friendly alternative that cuts costs by {}% while maintaining quality.", savings_percentage),
        format!("Reduce your spending by {}% with this smart alternative that offers similar benefits.", savings_percentage),
        format!("This economical option saves you {}% without compromising the core experience.", savings_percentage),
        format!("A thrifty choice that offers {}% in savings compared to the premium option.", savings_percentage),
    ]
}

/// Copy for offers attached to an activity when it is generated.
pub fn inline_alternative_copy(
    category: ActivityCategory,
    destination: &str,
    group: &GroupComposition,
    index: usize,
) -> (String, String) {
    let flavor = if group.has_children {
        "Family-friendly"
    } else {
        "Budget-friendly"
    };
    (
        format!("{} {} option {}", flavor, category, index + 1),
        format!(
            "A more budget-friendly {} option suitable for your group in {}.",
            category, destination
        ),
    )
}

/// Name, description and location for a rest block.
pub fn relaxation_copy(group: &GroupComposition, is_evening: bool) -> (&'static str, &'static str, &'static str) {
    let location = "At your accommodation or nearby";
    match (group.has_under_twelve, is_evening) {
        (true, false) => (
            "Family Rest Time",
            "Take some time to relax and let the kids recharge.",
            location,
        ),
        (false, false) => ("Rest & Relaxation", "Take some time to relax and recharge.", location),
        (true, true) => (
            "Family Evening Time",
            "Wind down after your day with some family time.",
            location,
        ),
        (false, true) => (
            "Evening Relaxation",
            "Wind down after your day of activities.",
            location,
        ),
    }
}

/// Name, description and location of the generic "explore" placeholder.
pub fn explore_copy(destination: &str, group: &GroupComposition) -> (String, String, String) {
    let location = format!("Downtown {}", destination);
    if group.has_children {
        (
            format!("Family-friendly exploration of {}", destination),
            format!(
                "Take some time to explore the family-friendly highlights of {} at your own pace.",
                destination
            ),
            location,
        )
    } else {
        (
            format!("Explore {}", destination),
            format!(
                "Take some time to explore the highlights of {} at your own pace.",
                destination
            ),
            location,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traveler::Traveler;

    #[test]
    fn test_family_copy_for_pubs() {
        let family = GroupComposition::of(&[Traveler::new("a", 40), Traveler::new("b", 10)]);
        let names = activity_names(ActivityCategory::Pubs, "Dublin", &family);
        assert!(names.iter().all(|name| !name.contains("Pub")));

        let adults = GroupComposition::of(&[Traveler::new("a", 40)]);
        let names = activity_names(ActivityCategory::Pubs, "Dublin", &adults);
        assert!(names.contains(&"Local Pub Crawl".to_string()));
    }

    #[test]
    fn test_destination_is_interpolated() {
        let adults = GroupComposition::of(&[Traveler::new("a", 40)]);
        let names = activity_names(ActivityCategory::Culture, "Kyoto", &adults);
        assert_eq!(names[0], "Kyoto Museum Visit");
        assert!(locations("Kyoto").iter().all(|loc| loc.contains("Kyoto")));
        assert_eq!(explore_copy("Kyoto", &adults).0, "Explore Kyoto");
    }

    #[test]
    fn test_every_category_has_three_lines() {
        let group = GroupComposition::default();
        for category in ActivityCategory::ALL {
            assert_eq!(activity_names(category, "Rome", &group).len(), 3);
            assert_eq!(activity_descriptions(category, "Rome", &group).len(), 3);
        }
    }
}
