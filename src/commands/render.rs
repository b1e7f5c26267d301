use std::path::Path;
use tracing::info;

use crate::core::{render_update_file, render_zshrc_file};
use crate::error::FranklinError;
use crate::models::Platform;

/// Render the given templates for `platform`, zshrc first.
///
/// The first failure aborts; a later file is not touched.
pub fn render_templates(
    platform: Platform,
    zshrc: Option<&Path>,
    update: Option<&Path>,
) -> Result<(), FranklinError> {
    info!("Rendering OS-specific templates for {}", platform.display_name());

    if let Some(path) = zshrc {
        render_zshrc_file(path, platform)?;
    }
    if let Some(path) = update {
        render_update_file(path, platform)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_zshrc_leaves_update_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let update = temp_dir.path().join("update.sh");
        let original = "case \"$OS_FAMILY\" in\n  fedora)\n    dnf upgrade\n    ;;\nesac\n";
        fs::write(&update, original).unwrap();

        let missing = temp_dir.path().join("missing.zshrc");
        let result = render_templates(Platform::Fedora, Some(missing.as_path()), Some(update.as_path()));

        assert!(matches!(result, Err(FranklinError::Render(_))));
        assert_eq!(fs::read_to_string(&update).unwrap(), original);
    }

    #[test]
    fn test_nothing_to_render() {
        assert!(render_templates(Platform::Macos, None, None).is_ok());
    }
}
