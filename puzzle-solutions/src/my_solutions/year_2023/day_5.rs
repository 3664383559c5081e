use crate::utils::interval_remap::{IntervalRemapper, RemapError, Stage, TranslationRule};
use anyhow::{Context, anyhow};
use itertools::Itertools;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges", "almanac"])]
pub struct Solver;

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    stages: Vec<Stage>,
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let almanac = parse_almanac(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        debug!(
            seeds = almanac.seeds.len(),
            stages = almanac.stages.len(),
            "parsed almanac"
        );
        Ok(almanac)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let remapper =
            IntervalRemapper::from_values(shared.seeds.iter().copied()).map_err(SolveError::failed)?;
        lowest_location(remapper, &shared.stages)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::failed(RemapError::InvalidInput(format!(
                "seed ranges need an even number of values, got {}",
                shared.seeds.len()
            ))));
        }
        let remapper = IntervalRemapper::new(shared.seeds.iter().copied().tuples())
            .map_err(SolveError::failed)?;
        lowest_location(remapper, &shared.stages)
    }
}

fn lowest_location(mut remapper: IntervalRemapper, stages: &[Stage]) -> Result<String, SolveError> {
    remapper.apply_all(stages);
    remapper
        .minimum()
        .map(|location| location.to_string())
        .ok_or_else(|| SolveError::failed(RemapError::InvalidInput("no seeds to plant".into())))
}

/// Stage being collected, with the line of its header for error messages
struct PendingStage<'a> {
    header_line: usize,
    name: &'a str,
    rules: Vec<TranslationRule>,
}

impl PendingStage<'_> {
    fn finish(self) -> anyhow::Result<Stage> {
        Stage::new(self.rules)
            .map(|stage| stage.with_name(self.name))
            .with_context(|| format!("(line {}) in `{}` map", self.header_line, self.name))
    }
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()));

    let (seeds_line, seeds) = lines
        .by_ref()
        .find(|(_, line)| !line.is_empty())
        .ok_or_else(|| anyhow!("missing `seeds:` line"))?;
    let seeds = seeds
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("(line {}) expected `seeds:` line", seeds_line))?
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("(line {}) invalid seed `{}`", seeds_line, token))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut stages = Vec::new();
    let mut pending: Option<PendingStage> = None;

    for (line_idx, line) in lines {
        if line.is_empty() {
            if let Some(stage) = pending.take() {
                stages.push(stage.finish()?);
            }
            continue;
        }

        if line.contains("map") {
            if let Some(stage) = pending.take() {
                stages.push(stage.finish()?);
            }
            pending = Some(PendingStage {
                header_line: line_idx,
                name: line.split_whitespace().next().unwrap_or(line),
                rules: Vec::new(),
            });
            continue;
        }

        let stage = pending
            .as_mut()
            .ok_or_else(|| anyhow!("(line {}) rule outside of any map", line_idx))?;
        let rule = parse_rule(line).with_context(|| format!("(line {})", line_idx))?;
        stage.rules.push(rule);
    }

    if let Some(stage) = pending {
        stages.push(stage.finish()?);
    }

    Ok(Almanac { seeds, stages })
}

fn parse_rule(line: &str) -> anyhow::Result<TranslationRule> {
    let (dest, source, range) = line
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected `<dest> <source> <length>`, got `{}`", line))?;

    let rule = TranslationRule::new(
        dest.with_context(|| format!("invalid destination in `{}`", line))?,
        source.with_context(|| format!("invalid source in `{}`", line))?,
        range.with_context(|| format!("invalid length in `{}`", line))?,
    )?;
    Ok(rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzle_solver::{PuzzleId, RegistryBuilder, Solver as _};

    const EXAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    fn parse_err(input: &str) -> String {
        match Solver::parse(input) {
            Err(ParseError::InvalidFormat(msg)) => msg,
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_example_part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "35");
    }

    #[test]
    fn test_example_part2() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn test_parses_stage_names() {
        let almanac = Solver::parse(EXAMPLE).unwrap();

        assert_eq!(almanac.seeds, [79, 14, 55, 13]);
        let names: Vec<_> = almanac.stages.iter().filter_map(Stage::name).collect();
        assert_eq!(
            names,
            [
                "seed-to-soil",
                "soil-to-fertilizer",
                "fertilizer-to-water",
                "water-to-light",
                "light-to-temperature",
                "temperature-to-humidity",
                "humidity-to-location",
            ]
        );
        assert_eq!(almanac.stages[2].len(), 4);
    }

    #[test]
    fn test_tolerates_crlf_and_extra_blank_lines() {
        let input = "\r\nseeds: 10 5\r\n\r\n\r\na-to-b map:\r\n100 10 2\r\n\r\n\r\n";
        let mut shared = Solver::parse(input).unwrap();

        assert_eq!(shared.stages.len(), 1);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "12");
    }

    #[test]
    fn test_missing_seeds_line() {
        assert!(parse_err("").contains("missing `seeds:`"));
        assert!(parse_err("a-to-b map:\n1 2 3").contains("(line 1) expected `seeds:`"));
    }

    #[test]
    fn test_bad_seed_token() {
        assert!(parse_err("seeds: 1 two 3").contains("invalid seed `two`"));
    }

    #[test]
    fn test_wrong_token_count() {
        let msg = parse_err("seeds: 1\n\na-to-b map:\n1 2\n");
        assert!(msg.contains("(line 4)"), "{msg}");
        assert!(msg.contains("`1 2`"), "{msg}");
    }

    #[test]
    fn test_non_integer_rule() {
        let msg = parse_err("seeds: 1\n\na-to-b map:\n1 x 3\n");
        assert!(msg.contains("invalid source"), "{msg}");
    }

    #[test]
    fn test_negative_rule_length() {
        let msg = parse_err("seeds: 1\n\na-to-b map:\n1 2 -3\n");
        assert!(msg.contains("negative length"), "{msg}");
    }

    #[test]
    fn test_rule_before_header() {
        assert!(parse_err("seeds: 1\n\n1 2 3\n").contains("(line 3) rule outside of any map"));
    }

    #[test]
    fn test_overlapping_rules_rejected() {
        let msg = parse_err("seeds: 1\n\na-to-b map:\n0 10 10\n50 15 10\n");
        assert!(msg.contains("(line 3) in `a-to-b` map"), "{msg}");
        assert!(msg.contains("overlap in source space"), "{msg}");
    }

    #[test]
    fn test_odd_seed_count_fails_part2_only() {
        let mut shared = Solver::parse("seeds: 1 2 3\n").unwrap();

        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_empty_seed_range_counts_for_minimum() {
        let mut shared = Solver::parse("seeds: 5 0 100 1\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5");

        let mut shared = Solver::parse("seeds: 5 0\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "5");
    }

    #[test]
    fn test_empty_seed_range_is_remapped() {
        let mut shared = Solver::parse("seeds: 12 0 30 5\n\na-to-b map:\n100 10 10\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "30");

        let mut shared = Solver::parse("seeds: 12 0 30 5\n\na-to-b map:\n0 10 10\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn test_max_seed_value_limits() {
        let mut shared = Solver::parse("seeds: 9223372036854775807 0\n").unwrap();

        // A single seed is [v, v + 1), which cannot end past i64::MAX
        match Solver::solve_part(&mut shared, 1) {
            Err(SolveError::SolveFailed(e)) => assert!(e.to_string().contains("overflows"), "{e}"),
            other => panic!("expected SolveFailed, got {other:?}"),
        }
        assert_eq!(
            Solver::solve_part(&mut shared, 2).unwrap(),
            "9223372036854775807"
        );
    }

    #[test]
    fn test_no_seeds_fails() {
        let mut shared = Solver::parse("seeds:\n").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_registered_as_plugin() {
        let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
        let id = PuzzleId::new(2023, 5);

        let info = registry.get_info(id).unwrap();
        assert_eq!(info.parts, 2);
        assert!(info.tags.contains(&"ranges"));

        let mut solver = registry.create_solver(id, EXAMPLE).unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "35");
        assert_eq!(solver.solve(2).unwrap().answer, "46");
    }
}
