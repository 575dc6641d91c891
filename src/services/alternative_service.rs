use rand::Rng;

use crate::catalog::copy;
use crate::models::activity::{Activity, Alternative};
use crate::services::{
    pricing_service::PricingService,
    random::{generate_id, pick},
};

/// Activities cheaper than this get no on-demand offers.
pub const CHEAPER_ALTERNATIVE_MIN_COST: u32 = 30;

/// One or two cheaper substitutes for `activity`, named after its category.
///
/// Rest blocks and activities under [`CHEAPER_ALTERNATIVE_MIN_COST`] have none.
pub fn generate_cheaper_alternatives<R: Rng + ?Sized>(
    rng: &mut R,
    activity: &Activity,
) -> Vec<Alternative> {
    if activity.is_relaxation || activity.cost < CHEAPER_ALTERNATIVE_MIN_COST {
        return Vec::new();
    }

    let names = copy::alternative_names(activity.category);
    let count = rng.gen_range(1..=2);

    (0..count)
        .map(|index| {
            let savings_percentage = PricingService::draw_savings(rng);
            let descriptions = copy::savings_descriptions(savings_percentage);
            Alternative {
                id: generate_id(rng),
                name: names[index % names.len()].to_string(),
                description: pick(rng, &descriptions).cloned().unwrap_or_default(),
                cost: PricingService::discounted(activity.cost, savings_percentage),
                savings_percentage,
            }
        })
        .collect()
}
