//! Test utilities & fixtures.
//! World documents used by the integration tests live under `tests/test-data-int`.

use std::path::{Path, PathBuf};

use grue::adventure::{load_game_from_json, BufferedOutput, Session};

/// Return the path to the static integration test fixture directory.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test-data-int")
}

/// Load a fixture world into a fresh session; the returned buffer shares
/// the session's narration.
pub fn fixture_session(name: &str) -> (Session, BufferedOutput) {
    let document = load_game_from_json(fixture_root().join(name)).expect("fixture loads");
    let out = BufferedOutput::new();
    let session = document.into_session(out.clone()).expect("fixture builds");
    (session, out)
}

/// Dispatch one line and return only the narration it produced.
pub fn say(session: &mut Session, out: &BufferedOutput, input: &str) -> String {
    out.take();
    session.dispatch(input);
    out.take()
}

/// Write `json` into a temp dir and return the dir with the file path.
#[allow(dead_code)] // only the loading tests write their own documents
pub fn write_world(json: &str) -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("world.json");
    std::fs::write(&path, json).expect("write world");
    (tmp, path)
}
