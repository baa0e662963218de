//! End-to-end Literal Scenarios
//!
//! Literal text checked against the coin it must classify as, through the
//! untyped parser and back through the renderer:
//! - Reference vectors for each aura family
//! - Lists and blobs
//! - Inputs every grammar must refuse

use aura_codec::{nuck, rend};
use aura_core::{cord_from_str, Atom, Aura, Coin};

// ============================================================================
// SCENARIOS
// ============================================================================

/// One literal and its expected classification
#[derive(Clone, Debug)]
pub struct LiteralScenario {
    /// Literal text
    pub input: &'static str,
    /// Expected coin, `None` when the literal must be refused
    pub expected: Option<Coin>,
    /// Whether rendering `expected` gives `input` back
    pub canonical: bool,
}

impl LiteralScenario {
    pub fn canonical(input: &'static str, expected: Coin) -> Self {
        LiteralScenario {
            input,
            expected: Some(expected),
            canonical: true,
        }
    }

    pub fn lenient(input: &'static str, expected: Coin) -> Self {
        LiteralScenario {
            input,
            expected: Some(expected),
            canonical: false,
        }
    }

    pub fn rejected(input: &'static str) -> Self {
        LiteralScenario {
            input,
            expected: None,
            canonical: false,
        }
    }
}

/// A scenario that did not behave
#[derive(Clone, Debug)]
pub struct ScenarioFailure {
    pub input: &'static str,
    pub parsed: Option<Coin>,
    pub rendered: Option<String>,
}

/// Scenario run result
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub checked: usize,
    pub failures: Vec<ScenarioFailure>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reference literals across every aura family
pub fn reference_scenarios() -> Vec<LiteralScenario> {
    vec![
        // Integers
        LiteralScenario::canonical("0", Coin::dime(Aura::Ud, 0u32)),
        LiteralScenario::canonical("1.024", Coin::dime(Aura::Ud, 1024u32)),
        LiteralScenario::canonical("0x1234.abcd", Coin::dime(Aura::Ux, 0x1234_abcdu32)),
        LiteralScenario::canonical("0b1.0110", Coin::dime(Aura::Ub, 0b1_0110u32)),
        LiteralScenario::canonical("0i17", Coin::dime(Aura::Ui, 17u32)),
        LiteralScenario::canonical("-0i2", Coin::dime(Aura::Si, 3u32)),
        LiteralScenario::canonical("--0", Coin::dime(Aura::Sd, 0u32)),
        LiteralScenario::canonical("--1", Coin::dime(Aura::Sd, 2u32)),
        // Phonetic
        LiteralScenario::canonical("~zod", Coin::dime(Aura::P, 0u32)),
        LiteralScenario::canonical("~binzod", Coin::dime(Aura::P, 512u32)),
        LiteralScenario::canonical("~samzod", Coin::dime(Aura::P, 1024u32)),
        LiteralScenario::canonical("~sampel-palnet", Coin::dime(Aura::P, 1_624_961_343u32)),
        LiteralScenario::canonical(".~nec-binwes", Coin::dime(Aura::Q, 0x01_0203u32)),
        // Time
        LiteralScenario::canonical(
            "~2000.1.1",
            Coin::dime(Aura::Da, epoch_2000()),
        ),
        LiteralScenario::canonical("~s0", Coin::dime(Aura::Dr, 0u32)),
        LiteralScenario::canonical("~m1", Coin::dime(Aura::Dr, Atom::from(60u32) << 64u32)),
        // Flags, null, addresses
        LiteralScenario::canonical(".y", Coin::dime(Aura::F, 0u32)),
        LiteralScenario::canonical(".n", Coin::dime(Aura::F, 1u32)),
        LiteralScenario::canonical("~", Coin::dime(Aura::N, 0u32)),
        LiteralScenario::canonical(".192.168.0.1", Coin::dime(Aura::If, 0xc0a8_0001u32)),
        LiteralScenario::lenient(".255.0.0.999", Coin::dime(Aura::If, 0xff00_03e7u32)),
        LiteralScenario::canonical(".0.0.0.0.0.0.0.1", Coin::dime(Aura::Is, 1u32)),
        // Floats
        LiteralScenario::canonical(".1.5", Coin::dime(Aura::Rs, 0x3fc0_0000u32)),
        LiteralScenario::canonical(".~1.5", Coin::dime(Aura::Rd, 0x3ff8_0000_0000_0000u64)),
        LiteralScenario::canonical(".~~1", Coin::dime(Aura::Rh, 0x3c00u32)),
        // Text
        LiteralScenario::canonical("foo", Coin::dime(Aura::Tas, cord_from_str("foo"))),
        LiteralScenario::canonical("~.foo", Coin::dime(Aura::Ta, cord_from_str("foo"))),
        LiteralScenario::canonical("~~a.b", Coin::dime(Aura::T, cord_from_str("a b"))),
        LiteralScenario::canonical("~-~1f920.", Coin::dime(Aura::C, 0x1_f920u32)),
        // Lists and blobs
        LiteralScenario::canonical(".__", Coin::Many(vec![])),
        LiteralScenario::canonical("._123__", Coin::Many(vec![Coin::dime(Aura::Ud, 123u32)])),
        LiteralScenario::canonical(
            "._~~zod_0x1234.abcd__",
            Coin::Many(vec![
                Coin::dime(Aura::P, 0u32),
                Coin::dime(Aura::Ux, 0x1234_abcdu32),
            ]),
        ),
        LiteralScenario::canonical("._.~-~-__", Coin::Many(vec![Coin::Many(vec![])])),
        LiteralScenario::canonical("~02", Coin::blob(2u32)),
        // Refused
        LiteralScenario::rejected("00"),
        LiteralScenario::rejected("01"),
        LiteralScenario::rejected("0b01"),
        LiteralScenario::rejected("1000"),
        LiteralScenario::rejected("~mister--dister"),
        LiteralScenario::rejected("~2000.13.1"),
        LiteralScenario::rejected("._~zod__"),
        LiteralScenario::rejected(""),
    ]
}

/// `~2000.1.1` as an absolute date atom
pub fn epoch_2000() -> Atom {
    Atom::from(0x8000_000d_070b_5100u64) << 64u32
}

/// Check each scenario through `nuck`, and canonical ones through `rend`
pub fn run_scenarios(scenarios: &[LiteralScenario]) -> ScenarioReport {
    let mut report = ScenarioReport::default();

    for scenario in scenarios {
        report.checked += 1;
        let parsed = nuck(scenario.input);
        let rendered = scenario.expected.as_ref().map(rend);

        let parse_ok = parsed == scenario.expected;
        let render_ok = !scenario.canonical || rendered.as_deref() == Some(scenario.input);
        if !parse_ok || !render_ok {
            report.failures.push(ScenarioFailure {
                input: scenario.input,
                parsed,
                rendered,
            });
        }
    }

    report
}

// ============================================================================
// TEST FUNCTIONS
// ============================================================================

/// Run every reference scenario
pub fn test_reference_literals() -> ScenarioReport {
    run_scenarios(&reference_scenarios())
}

/// Both spellings of 1 BC name the same day
pub fn test_negative_year() -> bool {
    match (nuck("~0.1.1"), nuck("~1-.1.1")) {
        (Some(zero), Some(one_bc)) => zero == one_bc && rend(&zero) == "~1-.1.1",
        _ => false,
    }
}
