use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::input::InputError;
use crate::model::profile::ClassificationProfile;

/// Loads a JSON profile. Missing keys fall back to `ClassificationProfile::default_v1()`.
pub fn load_profile(path: &Path) -> Result<ClassificationProfile, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    let profile: ClassificationProfile = serde_json::from_reader(reader)?;
    Ok(profile)
}

pub fn parse_profile(json: &str) -> Result<ClassificationProfile, InputError> {
    Ok(serde_json::from_str(json)?)
}
