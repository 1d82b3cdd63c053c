#![no_main]

use chip_input::{ChipInputConfig, serialize};
use core_types::{Key, KeyDown};
use dom::build::{doc, elem, text};
use libfuzzer_sys::fuzz_target;
use page::Page;

const ALPHABET: &[u8] = b"aZ9_- ,\n!";

fuzz_target!(|data: &[u8]| {
    let Some((&seed_len, rest)) = data.split_first() else {
        return;
    };
    let (seed, ops) = rest.split_at((seed_len as usize).min(rest.len()));
    let seed = String::from_utf8_lossy(seed);

    let mut page = Page::load(
        doc(vec![elem(
            "form",
            &[],
            vec![
                elem(
                    "textarea",
                    &[("name", "codes"), ("class", "permissions-chip-input")],
                    vec![text(&seed)],
                ),
                elem("button", &[], vec![text("Save")]),
            ],
        )]),
        ChipInputConfig::default(),
    );
    let form = page.document().elements_named("form")[0];
    let field = page.document().elements_named("textarea")[0];
    let entry = page.chips().for_field(field).unwrap().entry();

    for &op in ops {
        match op % 8 {
            0..=2 => {
                page.focus(entry);
                let ch = ALPHABET[(op as usize / 8) % ALPHABET.len()] as char;
                page.type_text(&ch.to_string());
            }
            3 => {
                page.key_down(KeyDown::new(Key::Backspace));
            }
            4 => {
                page.key_down(KeyDown::new(Key::Enter));
            }
            5 => page.blur(),
            6 => {
                let index = (op / 8) as usize;
                if let Some(button) = page.chips().for_field(field).unwrap().remove_button(index) {
                    page.click(button);
                }
            }
            _ => {
                let submission = page.submit(form);
                let tokens = page.chips().for_field(field).unwrap().tokens();
                assert_eq!(submission.get("codes"), Some(serialize(tokens).as_str()));
            }
        }

        let controller = page.chips().for_field(field).unwrap();
        assert_eq!(page.value(field), Some(serialize(controller.tokens()).as_str()));
        assert!(controller.tokens().iter().all(|t| chip_input::is_valid(t)));
    }
});
