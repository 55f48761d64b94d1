use std::path::{Path, PathBuf};

use serde_json::{Value, json};

fn ev(payload: Value) -> Value {
    json!({ "payload": payload })
}

/// Two hands at a three-handed table: a blind steal and a river showdown.
pub fn sample_log() -> Value {
    let players = json!([
        {"seat": 3, "name": "Hero Name", "stack": 10000, "hand": ["Qs", "Qh"]},
        {"seat": 6, "name": "villain", "stack": 8000, "hand": ["Jc", "Td"]},
        {"seat": 9, "name": "fish", "stack": 12000}
    ]);
    json!({
        "gameId": "pglXyz",
        "hands": [
            {
                "id": "steal",
                "smallBlind": 50,
                "bigBlind": 100,
                "startedAt": 1_700_000_000_000i64,
                "dealerSeat": 3,
                "players": players,
                "events": [
                    ev(json!({"type": 3, "seat": 6, "value": 50})),
                    ev(json!({"type": 2, "seat": 9, "value": 100})),
                    ev(json!({"type": 8, "seat": 3, "value": 300})),
                    ev(json!({"type": 11, "seat": 6})),
                    ev(json!({"type": 11, "seat": 9})),
                    ev(json!({"type": 10, "seat": 3, "value": 450, "pot": 450}))
                ]
            },
            {
                "id": "showdown",
                "smallBlind": 50,
                "bigBlind": 100,
                "startedAt": 1_700_000_060_000i64,
                "dealerSeat": 6,
                "players": players,
                "events": [
                    ev(json!({"type": 3, "seat": 9, "value": 50})),
                    ev(json!({"type": 2, "seat": 3, "value": 100})),
                    ev(json!({"type": 7, "seat": 6, "value": 100})),
                    ev(json!({"type": 11, "seat": 9})),
                    ev(json!({"type": 0, "seat": 3})),
                    ev(json!({"type": 9, "turn": 1, "cards": ["2h", "7d", "Kc"]})),
                    ev(json!({"type": 0, "seat": 3})),
                    ev(json!({"type": 0, "seat": 6})),
                    ev(json!({"type": 9, "turn": 2, "cards": ["9s"]})),
                    ev(json!({"type": 0, "seat": 3})),
                    ev(json!({"type": 0, "seat": 6})),
                    ev(json!({"type": 9, "turn": 3, "cards": ["4c"]})),
                    ev(json!({"type": 8, "seat": 3, "value": 200})),
                    ev(json!({"type": 7, "seat": 6, "value": 200})),
                    ev(json!({"type": 15})),
                    ev(json!({"type": 12, "seat": 3, "cards": ["Qs", "Qh"], "handDescription": "Pair, Q's"})),
                    ev(json!({"type": 12, "seat": 6, "cards": ["Jc", "Td"], "handDescription": "High Card"})),
                    ev(json!({"type": 10, "seat": 3, "value": 600, "pot": 650}))
                ]
            }
        ]
    })
}

pub fn write_plain(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, sample_log().to_string()).expect("write fixture");
    path
}

pub fn write_zst(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let packed = zstd::bulk::compress(sample_log().to_string().as_bytes(), 3).expect("compress");
    std::fs::write(&path, packed).expect("write fixture");
    path
}

/// What the engine renders for the fixture with default labels.
pub fn expected_transcript(hero: &str) -> String {
    let session: nowstars_engine::Session =
        serde_json::from_value(sample_log()).expect("fixture parses");
    nowstars_engine::convert_session(
        &session,
        &nowstars_engine::ConverterConfig::with_hero(hero),
    )
    .expect("fixture converts")
    .concat()
}
