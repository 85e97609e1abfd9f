use deidash_engine::truncate_words;
use deidash_types::ContractRecord;
use std::borrow::Cow;

use crate::presentation::view_models::{
    AwardCardViewModel, CommandResultViewModel, FeedViewModel, StatusBadge,
};

pub fn feed_content(
    sample: &[&ContractRecord],
    requested: usize,
    population: usize,
    word_limit: usize,
) -> FeedViewModel {
    let cards = sample
        .iter()
        .map(|record| {
            let description = truncate_words(&record.award_description, word_limit);
            AwardCardViewModel {
                award_id: record.award_id.clone(),
                recipient_name: record.recipient_name.clone(),
                awarding_agency_name: record.awarding_agency_name.clone(),
                award_amount: record.award_amount,
                action_date: record.action_day(),
                truncated: matches!(description, Cow::Owned(_)),
                description: description.into_owned(),
            }
        })
        .collect();

    FeedViewModel {
        requested,
        population,
        cards,
    }
}

pub fn present_feed(
    sample: &[&ContractRecord],
    requested: usize,
    population: usize,
    word_limit: usize,
) -> CommandResultViewModel<FeedViewModel> {
    let content = feed_content(sample, requested, population, word_limit);
    let result = CommandResultViewModel::new(content);

    if population == 0 {
        return result.with_badge(StatusBadge::warning("No contracts match the current filters"));
    }

    result
}
