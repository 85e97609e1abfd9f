use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ExportViewModel, Guidance, GuidanceViewModel, InitViewModel,
    StatusBadge,
};

pub fn present_init(
    config_path: &Path,
    dataset: &Path,
    written: bool,
) -> CommandResultViewModel<InitViewModel> {
    let dataset_exists = dataset.exists();
    let content = InitViewModel {
        config_path: config_path.display().to_string(),
        dataset: dataset.display().to_string(),
        dataset_exists,
        written,
    };

    let badge = if written {
        StatusBadge::success("Configuration written")
    } else {
        StatusBadge::info("Configuration already exists")
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    if !written {
        result = result.with_suggestion(
            Guidance::new("Overwrite it with defaults").with_command("deidash init --force"),
        );
    }
    if !dataset_exists {
        result = result.with_suggestion(
            Guidance::new("Point the dashboard at your contract CSV")
                .with_command("deidash init --force --dataset <CSV>"),
        );
    } else {
        result = result
            .with_suggestion(Guidance::new("View the dashboard").with_command("deidash summary"));
    }

    result
}

pub fn present_export(output: &Path, rows_written: usize) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel {
        output: output.display().to_string(),
        rows_written,
    })
    .with_badge(StatusBadge::success("Export complete"))
}

pub fn present_guidance(
    config_path: &Path,
    dataset: &Path,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        dataset: dataset.display().to_string(),
        dataset_exists: dataset.exists(),
    })
}
