use rcasim_lib::{Config, Error, Rule, Status, ALIVE, DEAD};
use std::error::Error as StdError;

/// The worked example from the original puzzle. The sum of the coordinates
/// of active cells after 20 generations is 325.
const EXAMPLE_INPUT: &str = "\
initial state: #..#.#..##......###...###

...## => #
..#.. => #
.#... => #
.#.#. => #
.#.## => #
.##.. => #
.#### => #
#.#.# => #
#.### => #
##.#. => #
##.## => #
###.. => #
###.# => #
####. => #
";

/// A rule set that shifts a lone active cell right by one per generation,
/// so the metric at generation `n` is exactly `n`.
fn shift_config() -> Config {
    Config::new("#", vec![".#... => #".parse().unwrap()])
}

#[test]
fn generation_zero() -> Result<(), Box<dyn StdError>> {
    let config = Config::from_input(EXAMPLE_INPUT)?;
    assert_eq!(config.world()?.metric(), 145);
    let mut extrapolator = config.extrapolator()?;
    assert_eq!(extrapolator.status(), Status::Running);
    assert_eq!(extrapolator.project(0), 145);
    assert_eq!(extrapolator.status(), Status::Done);
    Ok(())
}

#[test]
fn example_after_20() -> Result<(), Box<dyn StdError>> {
    let config = Config::from_input(EXAMPLE_INPUT)?;
    let mut world = config.world()?;
    for _ in 0..20 {
        world.step();
    }
    assert_eq!(world.generation(), 20);
    assert_eq!(world.metric(), 325);

    // With a confidence too high to be reached in 20 steps, the
    // extrapolator must simulate all the way and agree.
    let mut extrapolator = config.set_confidence(25).extrapolator()?;
    assert_eq!(extrapolator.project(20), 325);
    Ok(())
}

#[test]
fn padding_invariant() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::from_input(EXAMPLE_INPUT)?.world()?;
    for _ in 0..50 {
        world.step();
        let tape = world.tape();
        let margin = (world.rule().width() - 1) as i64;
        let (lo, hi) = tape.bounds().unwrap();
        assert!(lo + tape.zero_offset() >= margin);
        assert!(hi + tape.zero_offset() + margin < tape.len() as i64);
        assert_eq!(tape.get(lo), ALIVE);
        assert_eq!(tape.get(hi), ALIVE);
        assert_eq!(tape.get(lo - 1), DEAD);
        assert_eq!(tape.get(hi + margin + 1), DEAD);
    }
    Ok(())
}

#[test]
fn example_stabilization_policy() -> Result<(), Box<dyn StdError>> {
    // On the example input the default single-repeat policy stabilizes
    // prematurely: the delta transiently repeats at generations 51-52,
    // well before the steady regime of 20 per generation from
    // generation 87. The projection from the transient underestimates.
    let config = Config::from_input(EXAMPLE_INPUT)?;
    let mut world = config.world()?;
    for _ in 0..100 {
        world.step();
    }
    assert_eq!(world.metric(), 1374);

    let mut extrapolator = config.extrapolator()?;
    assert_eq!(extrapolator.project(100), 601);
    assert_eq!(extrapolator.world().generation(), 52);

    // Two consecutive repeats ride out the transient and agree with
    // brute force.
    let mut extrapolator = config.set_confidence(2).extrapolator()?;
    assert_eq!(extrapolator.project(100), 1374);
    assert_eq!(extrapolator.world().generation(), 89);
    Ok(())
}

#[test]
fn example_after_50_billion() -> Result<(), Box<dyn StdError>> {
    // metric[52] = 553, delta 1 under the single-repeat policy;
    // metric[89] = 1154, delta 20 once the transient is ridden out.
    let config = Config::from_input(EXAMPLE_INPUT)?;
    let mut extrapolator = config.extrapolator()?;
    assert_eq!(extrapolator.project(50_000_000_000), 50_000_000_501);
    let mut extrapolator = config.set_confidence(2).extrapolator()?;
    assert_eq!(extrapolator.project(50_000_000_000), 999_999_999_374);
    Ok(())
}

#[test]
fn extrapolation_matches_brute_force() -> Result<(), Box<dyn StdError>> {
    let config = shift_config();
    for n in 0..=200 {
        let mut world = config.world()?;
        for _ in 0..n {
            world.step();
        }
        assert_eq!(world.metric(), n as i64);
        assert_eq!(config.extrapolator()?.project(n), n as i64);
    }
    Ok(())
}

#[test]
fn stabilizes_at_earliest_generation() -> Result<(), Box<dyn StdError>> {
    // Deltas are constant from the very first one, so a single repeat
    // is observed at generation 2.
    let mut extrapolator = shift_config().extrapolator()?;
    assert_eq!(extrapolator.project(50_000_000_000), 50_000_000_000);
    assert_eq!(extrapolator.world().generation(), 2);
    Ok(())
}

#[test]
fn multi_repeat_confidence() -> Result<(), Box<dyn StdError>> {
    // Requiring two consecutive repeats delays stabilization by one
    // generation without changing the projection.
    let mut extrapolator = shift_config().set_confidence(2).extrapolator()?;
    assert_eq!(extrapolator.project(50_000_000_000), 50_000_000_000);
    assert_eq!(extrapolator.world().generation(), 3);
    Ok(())
}

#[test]
fn empty_rule_table() -> Result<(), Box<dyn StdError>> {
    // Every generation after the first is all-inactive, so the metric is
    // constant and stabilization is detected with a delta of 0.
    let mut extrapolator = Config::new("#", Vec::new()).extrapolator()?;
    assert_eq!(extrapolator.project(50_000_000_000), 0);
    assert_eq!(extrapolator.world().generation(), 2);

    // A nonzero initial metric adds one changing delta first.
    let mut extrapolator = Config::new("#..#", Vec::new()).extrapolator()?;
    assert_eq!(extrapolator.project(1_000), 0);
    assert_eq!(extrapolator.world().generation(), 3);
    Ok(())
}

#[test]
fn ambiguous_rules() {
    let rules: Vec<Rule> = vec![
        "..#.. => #".parse().unwrap(),
        "..#.. => .".parse().unwrap(),
    ];
    assert_eq!(
        Config::new("#", rules).world().unwrap_err(),
        Error::AmbiguousRule("..#..".to_string())
    );

    // Duplicates with the same output are not ambiguous.
    let rules: Vec<Rule> = vec![
        "..#.. => #".parse().unwrap(),
        "..#.. => #".parse().unwrap(),
    ];
    assert!(Config::new("#", rules).world().is_ok());
}

#[test]
fn bad_rule_widths() {
    let rules: Vec<Rule> = vec!["#. => #".parse().unwrap()];
    assert_eq!(
        Config::new("#", rules).world().unwrap_err(),
        Error::EvenRuleWidth(2)
    );

    let rules: Vec<Rule> = vec!["..#.. => #".parse().unwrap(), "### => #".parse().unwrap()];
    assert_eq!(
        Config::new("#", rules).world().unwrap_err(),
        Error::RuleWidthMismatch {
            expected: 5,
            found: 3
        }
    );

    assert_eq!(
        Config::new("#", Vec::new()).set_width(4).world().unwrap_err(),
        Error::EvenRuleWidth(4)
    );
}

#[test]
fn background_activating_rule() {
    let rules: Vec<Rule> = vec!["..... => #".parse().unwrap()];
    assert_eq!(
        Config::new("#", rules).world().unwrap_err(),
        Error::B0Error
    );
}

#[test]
fn parse_errors() {
    assert_eq!(
        "..#.. -> #".parse::<Rule>().unwrap_err(),
        Error::BadRuleLine("..#.. -> #".to_string())
    );
    assert_eq!(
        "..x.. => #".parse::<Rule>().unwrap_err(),
        Error::UnknownCellChar('x')
    );
    assert_eq!(
        Config::new("#x", Vec::new()).world().unwrap_err(),
        Error::UnknownCellChar('x')
    );
    assert_eq!(
        Config::new("", Vec::new()).world().unwrap_err(),
        Error::EmptyPattern
    );
    assert_eq!(
        Config::from_input("...## => #\n").unwrap_err(),
        Error::MissingInitialState
    );
}

#[test]
fn display() -> Result<(), Box<dyn StdError>> {
    let mut world = shift_config().world()?;
    assert_eq!(world.display(), "....#....");
    world.step();
    assert_eq!(world.display(), ".....#....");
    assert_eq!(world.metric(), 1);
    Ok(())
}
