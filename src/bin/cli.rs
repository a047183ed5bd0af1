use dex_census::census::{
    ev_possibilities, item_possibilities, species_possibilities, team_possibilities,
};
use dex_census::census::math::{to_exp, to_exp_signed};
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

    // Each stage prints as soon as it completes, so a partial run still
    // shows everything computed up to that point.
    let total_items = item_possibilities(&items);
    println!("Total Item Possibilities: {}", to_exp(&total_items));

    let total_evs = ev_possibilities();
    println!("Total EV Possibilities: {}", to_exp(&total_evs));

    let summary = species_possibilities(&formats, &dex, &learnsets, &total_items, &total_evs);
    println!("Total Pokemon Possibilities: {}", to_exp(&summary.total));
    println!(
        "Average # of learnable moves: {}",
        summary.average_move_pool()
    );

    let teams = team_possibilities(&summary.counted_possibilities());
    println!("Total Team Possibilities: {}", to_exp(&teams.unrestricted));
    println!(
        "Total Team Possibilities (1 of each Pokemon per team): {}",
        to_exp_signed(&teams.one_per_species)
    );
    println!(
        "Total Team Possibilities for Both Sides (1 of each Pokemon per team): {}",
        to_exp_signed(&teams.both_sides)
    );
}
