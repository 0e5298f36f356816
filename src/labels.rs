//! Label resolution seam. The engines emit stable keys; display layers
//! resolve them through an injected `LabelResolver` so the library never
//! depends on a translation singleton.

pub trait LabelResolver {
    fn resolve(&self, key: &str) -> String;
}

/// Built-in English catalog. Unknown keys resolve to themselves so missing
/// entries stay visible instead of panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl LabelResolver for EnglishLabels {
    fn resolve(&self, key: &str) -> String {
        english(key).map(str::to_string).unwrap_or_else(|| key.to_string())
    }
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        // Display groups
        "group.project_shell" => "Project & Shell",
        "group.fixed_joinery" => "Fixed Joinery",
        "group.movables_tech" => "Movables & Tech",
        "group.renovation" => "Renovation",

        // Cost categories
        "cost.interior_design" => "Interior design",
        "cost.construction_finish" => "Construction & finish",
        "cost.materials" => "Materials",
        "cost.kitchen" => "Kitchen",
        "cost.appliances" => "Appliances",
        "cost.wardrobes" => "Wardrobes",
        "cost.furniture" => "Furniture & decor",
        "cost.renovation_prep" => "Renovation prep work",

        // Tier-dependent tooltips
        "tooltip.interior_design.budget" => "Layout drawings and a single revision round.",
        "tooltip.interior_design.standard" => {
            "Full design package with 3D views and two revision rounds."
        }
        "tooltip.interior_design.premium" => {
            "Author-supervised design with unlimited revisions and site visits."
        }
        "tooltip.construction_finish.budget" => "Standard crew, basic finishing tolerances.",
        "tooltip.construction_finish.standard" => {
            "Experienced crew with a dedicated site manager."
        }
        "tooltip.construction_finish.premium" => {
            "Specialist trades and premium finishing tolerances throughout."
        }
        "tooltip.materials.budget" => "Entry-level materials from stock collections.",
        "tooltip.materials.standard" => "Mid-range branded materials with wider color choice.",
        "tooltip.materials.premium" => "Designer-grade materials sourced to specification.",
        "tooltip.kitchen.budget" => "Modular kitchen fronts with laminate worktop.",
        "tooltip.kitchen.standard" => "Semi-custom kitchen with stone-composite worktop.",
        "tooltip.kitchen.premium" => "Fully bespoke kitchen with natural stone worktop.",
        "tooltip.appliances.budget" => "Essential appliance set from volume brands.",
        "tooltip.appliances.standard" => "Mid-range integrated appliance package.",
        "tooltip.appliances.premium" => "Premium integrated appliances with extended warranty.",
        "tooltip.wardrobes.budget" => "Standard-depth wardrobes with sliding doors.",
        "tooltip.wardrobes.standard" => "Made-to-measure wardrobes with soft-close hardware.",
        "tooltip.wardrobes.premium" => "Walk-in quality joinery with interior lighting.",
        "tooltip.furniture.budget" => "Loose furniture allowance, 15% of the project cost.",
        "tooltip.furniture.standard" => {
            "Curated furniture and decor selection, 15% of the project cost."
        }
        "tooltip.furniture.premium" => {
            "Designer furniture procurement service, 15% of the project cost."
        }
        "tooltip.renovation_prep" => "Dismantling, disposal and surface preparation.",

        // Phases
        "phase.prep.title" => "Dismantling & preparation",
        "phase.prep.status" => "Site is being cleared and protected",
        "phase.design.title" => "Design & planning",
        "phase.design.status" => "No site work yet; decisions happen on paper",
        "phase.rough.title" => "Rough construction",
        "phase.rough.status" => "Site is noisy and dusty; not habitable",
        "phase.finishes.title" => "Finishes & surfaces",
        "phase.finishes.status" => "Surfaces going in; site visits possible",
        "phase.fitout.title" => "Fit-out & styling",
        "phase.fitout.status" => "Clean works only; move-in approaching",

        // Tasks
        "task.demolition" => "Demolition of old finishes",
        "task.debris_removal" => "Debris removal",
        "task.surface_protection" => "Protect remaining surfaces",
        "task.concept_layout" => "Concept and layout plan",
        "task.material_palette" => "Material palette selection",
        "task.furniture_plan" => "Furniture placement plan",
        "task.permits" => "Permits and building approvals",
        "task.partition_framing" => "Partition framing",
        "task.electrical_rough_in" => "Electrical rough-in",
        "task.plumbing_rough_in" => "Plumbing rough-in",
        "task.wall_floor_finishes" => "Wall and floor finishes",
        "task.painting" => "Painting",
        "task.kitchen_install" => "Kitchen installation",
        "task.wardrobe_install" => "Wardrobe installation",
        "task.furniture_delivery" => "Furniture delivery and assembly",
        "task.styling_decor" => "Styling and decor",
        "task.final_walkthrough" => "Final walkthrough and handover",

        _ => return None,
    };
    Some(text)
}
