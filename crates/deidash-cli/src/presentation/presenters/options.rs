use deidash_types::ContractTable;
use std::path::Path;

use crate::presentation::view_models::{
    ALL_OPTION, CommandResultViewModel, DateBoundsViewModel, OptionsViewModel,
    ThemeOptionViewModel,
};

pub fn present_options(table: &ContractTable, dataset: &Path) -> CommandResultViewModel<OptionsViewModel> {
    let agencies = std::iter::once(ALL_OPTION.to_string())
        .chain(table.agencies())
        .collect();

    let size_categories = std::iter::once(ALL_OPTION.to_string())
        .chain(table.size_categories().iter().map(|s| s.label().to_string()))
        .collect();

    CommandResultViewModel::new(OptionsViewModel {
        dataset: dataset.display().to_string(),
        total_rows: table.len(),
        date_bounds: table.date_bounds().map(|b| DateBoundsViewModel {
            min: b.min,
            max: b.max,
        }),
        agencies,
        size_categories,
        themes: table
            .schema()
            .fields()
            .iter()
            .map(|field| ThemeOptionViewModel {
                label: field.label.clone(),
                column: field.column.clone(),
            })
            .collect(),
    })
}
