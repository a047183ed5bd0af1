use dex_census::census::{ev_possibilities, item_possibilities, species_possibilities};
use dex_census::census::math::to_exp;
use dex_census::census::species::SpeciesResolution;
use dex_census::data::dex::DexDatabase;
use dex_census::data::formats::FormatsDatabase;
use dex_census::data::items::ItemDatabase;
use dex_census::data::learnsets::LearnsetDatabase;

fn main() {
    env_logger::init();

    let formats = FormatsDatabase::load_default().expect("failed to load format data");
    let dex = DexDatabase::load_default().expect("failed to load dex data");
    let learnsets = LearnsetDatabase::load_default().expect("failed to load learnset data");
    let items = ItemDatabase::load_default().expect("failed to load item catalog");

    let total_items = item_possibilities(&items);
    let total_evs = ev_possibilities();
    let summary = species_possibilities(&formats, &dex, &learnsets, &total_items, &total_evs);

    let mut resolved = 0usize;
    let mut with_fallbacks = 0usize;
    let mut skipped = 0usize;
    for report in &summary.reports {
        match &report.resolution {
            SpeciesResolution::Resolved(count) => {
                resolved += 1;
                println!(
                    "{:<20} resolved  {:>3} moves  {}",
                    report.id,
                    report.move_pool,
                    to_exp(count)
                );
            }
            SpeciesResolution::FallbackApplied(count, reasons) => {
                with_fallbacks += 1;
                println!(
                    "{:<20} fallback  {:>3} moves  {}  [{}]",
                    report.id,
                    report.move_pool,
                    to_exp(count),
                    reasons
                );
            }
            SpeciesResolution::Skipped(reason) => {
                skipped += 1;
                println!("{:<20} skipped   ({})", report.id, reason);
            }
        }
    }

    println!();
    println!(
        "{} species: {} resolved, {} with fallbacks, {} skipped",
        summary.reports.len(),
        resolved,
        with_fallbacks,
        skipped
    );
}
