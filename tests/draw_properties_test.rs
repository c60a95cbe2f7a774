use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use secret_santa::{Assignment, ConstraintRegistry, DrawEngine, DrawError};
use std::collections::{HashMap, HashSet};

fn registry_with(names: &[&str], couples: &[(&str, &str)]) -> ConstraintRegistry {
    let mut registry = ConstraintRegistry::new();
    for name in names {
        registry.add_participant(name);
    }
    for (a, b) in couples {
        registry.add_couple(a, b);
    }
    registry
}

/// Checks the permutation, no-self-gift and single-cycle properties.
fn assert_single_cycle(assignment: &Assignment, participants: &[String]) {
    assert_eq!(assignment.len(), participants.len());

    let givers: HashSet<&str> = assignment.iter().map(|p| p.giver.as_str()).collect();
    let receivers: HashSet<&str> = assignment.iter().map(|p| p.receiver.as_str()).collect();
    let everyone: HashSet<&str> = participants.iter().map(String::as_str).collect();
    assert_eq!(givers, everyone, "every participant gives exactly once");
    assert_eq!(receivers, everyone, "every participant receives exactly once");

    let gives_to: HashMap<&str, &str> = assignment
        .iter()
        .map(|p| {
            assert_ne!(p.giver, p.receiver, "nobody gives to themself");
            (p.giver.as_str(), p.receiver.as_str())
        })
        .collect();

    let start = participants[0].as_str();
    let mut current = start;
    let mut visited = HashSet::new();
    loop {
        assert!(visited.insert(current), "{} visited twice", current);
        current = gives_to[current];
        if current == start {
            break;
        }
    }
    assert_eq!(visited.len(), participants.len(), "cycle covers everyone");
}

#[test]
fn test_no_couples_always_succeeds() {
    let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
    for n in 2..=names.len() {
        let registry = registry_with(&names[..n], &[]);
        let mut engine = DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(n as u64));

        for _ in 0..50 {
            let assignment = engine.draw(registry.participants(), &registry).unwrap();
            assert_single_cycle(&assignment, registry.participants());
        }
    }
}

#[test]
fn test_three_participants_form_a_three_cycle() {
    let registry = registry_with(&["A", "B", "C"], &[]);
    let mut engine = DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(3));

    let assignment = engine.draw(registry.participants(), &registry).unwrap();
    assert_single_cycle(&assignment, registry.participants());
    for i in 0..assignment.len() {
        let pair = assignment.pair_at(i).unwrap();
        let next = assignment.pair_at((i + 1) % assignment.len()).unwrap();
        assert_eq!(pair.receiver, next.giver);
    }
}

#[test]
fn test_two_person_couple_never_drawable() {
    let registry = registry_with(&["A", "B"], &[("A", "B")]);

    for seed in 0..10 {
        let mut engine = DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(
            engine.draw(registry.participants(), &registry),
            Err(DrawError::NoValidAssignment { attempts: 1000 })
        );
    }
}

#[test]
fn test_couple_never_paired_in_four_person_draw() {
    let registry = registry_with(&["A", "B", "C", "D"], &[("A", "B")]);
    let mut engine = DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(99));

    for _ in 0..200 {
        let assignment = engine.draw(registry.participants(), &registry).unwrap();
        assert_single_cycle(&assignment, registry.participants());
        for pair in &assignment {
            let link = (pair.giver.as_str(), pair.receiver.as_str());
            assert_ne!(link, ("A", "B"));
            assert_ne!(link, ("B", "A"));
        }
    }
}

#[test]
fn test_forbidden_pairs_respected_with_several_couples() {
    let couples = [("A", "B"), ("C", "D"), ("E", "F"), ("G", "H")];
    let registry = registry_with(&["A", "B", "C", "D", "E", "F", "G", "H"], &couples);
    let mut engine = DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(2025));

    for _ in 0..100 {
        let assignment = engine.draw(registry.participants(), &registry).unwrap();
        assert_single_cycle(&assignment, registry.participants());
        assert!(assignment
            .iter()
            .all(|p| !registry.is_forbidden(&p.giver, &p.receiver)));
    }
}

#[test]
fn test_one_person_forbidden_with_everyone_is_infeasible() {
    let registry = registry_with(&["A", "B", "C"], &[("A", "B"), ("A", "C")]);
    let mut engine = DrawEngine::with_rng(ChaCha8Rng::seed_from_u64(8)).with_max_attempts(200);

    assert_eq!(
        engine.draw(registry.participants(), &registry),
        Err(DrawError::NoValidAssignment { attempts: 200 })
    );
}

#[test]
fn test_fewer_than_two_participants() {
    let registry = registry_with(&["Solo"], &[]);
    let mut engine = DrawEngine::seeded(1);

    assert_eq!(
        engine.draw(registry.participants(), &registry),
        Err(DrawError::InsufficientParticipants {
            required: 2,
            found: 1
        })
    );
}
