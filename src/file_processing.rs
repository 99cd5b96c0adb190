/// Validates that the input path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to the input directory.
///
/// # Returns
/// * `anyhow::Result<()>` - Success or an error describing what is wrong with the path.
pub fn check_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!("Input path does not exist: {}", path.display()));
    }
    if !path.is_dir() {
        return Err(anyhow::anyhow!("Input path is not a directory: {}", path.display()));
    }
    anyhow::Ok(())
}

/// Creates the output directory (and any missing parents) if it does not exist.
///
/// # Arguments
/// * `path` - Path to the output directory.
///
/// # Returns
/// * `anyhow::Result<()>` - Success or an error if creation fails.
pub fn ensure_output_dir_exists<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path)
            .map_err(|e| anyhow::anyhow!("Failed to create output directory {}: {}", path.display(), e))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Output path is not a directory: {}", path.display()));
    }
    anyhow::Ok(())
}
