use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::state::Workspace;

/// Load a workspace snapshot from a JSON file. The session always starts signed out.
pub fn load_workspace<P: AsRef<Path>>(path: P) -> Result<Workspace> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let workspace: Workspace = serde_json::from_str(&content)?;
    info!(path = %path.display(), events = workspace.events.len(), "loaded workspace");
    Ok(workspace)
}

/// Load the snapshot if it exists, otherwise start from the demo data.
pub fn load_or_seed<P: AsRef<Path>>(path: P) -> Result<Workspace> {
    let path = path.as_ref();
    if path.exists() {
        load_workspace(path)
    } else {
        info!(path = %path.display(), "no workspace file, using demo data");
        Ok(Workspace::seeded())
    }
}

/// Save a workspace snapshot as pretty JSON.
pub fn save_workspace<P: AsRef<Path>>(path: P, workspace: &Workspace) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(workspace)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved workspace");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_keeps_state_but_not_session() {
        let mut ws = Workspace::seeded();
        ws.sign_in("amelia@catering.com", "admin123").unwrap();
        ws.purchasing.add_supplier("Dairy Co", "hi@dairy.co", "Milk, Cream");

        let file = NamedTempFile::new().unwrap();
        save_workspace(file.path(), &ws).unwrap();

        let reloaded = load_workspace(file.path()).unwrap();
        assert!(reloaded.current_user().is_none());
        assert_eq!(reloaded.purchasing.suppliers().len(), 3);
        assert_eq!(reloaded.menus.all(), ws.menus.all());
        assert_eq!(reloaded.events.all(), ws.events.all());
        assert!(reloaded.users.login("amelia@catering.com", "admin123").is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let json = r#"{
            "menus": [
                {"id": "m1", "name": "Brunch", "estimated_price": "30",
                 "dishes": [{"id": "r1", "name": "Pancakes", "portion_size": 4,
                             "ingredients": [{"id": "i1", "name": "Flour", "unit": "kg", "quantity": "0.5", "cost": "1.2"}]}]}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let ws = load_workspace(file.path()).unwrap();
        assert_eq!(ws.menus.len(), 1);
        assert!(ws.events.is_empty());
        assert!(ws.users.is_empty());
        assert!(ws.menus.find_recipe_by_name("pancakes").is_some());
    }

    #[test]
    fn test_load_or_seed_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let ws = load_or_seed(dir.path().join("missing.json")).unwrap();
        assert_eq!(ws.users.len(), 5);
    }
}
