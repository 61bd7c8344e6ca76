//! Unit tests for park-agent.

#[cfg(test)]
mod helpers {
    use park_core::AgentId;

    use crate::{AgeClass, Agent, BehaviorProfile};

    pub fn profile() -> BehaviorProfile {
        BehaviorProfile {
            archetype:             "park_visitor".into(),
            stay_time_preference:  360,
            allow_repeats:         true,
            attraction_preference: 0.5,
            wait_threshold:        60,
            age_class:             AgeClass::NoPreference,
            expedited_ability:     true,
            exp_wait_threshold:    30,
            exp_limit:             2,
        }
    }

    pub fn agent() -> Agent {
        Agent::new(AgentId(0), profile(), 3, 2)
    }
}

// ── Agent transitions ─────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use park_core::{ActivityId, AttractionId, Minute};

    use super::helpers::agent;
    use crate::{Action, HeldPass, HeldPasses, Location};

    #[test]
    fn starts_outside() {
        let a = agent();
        assert!(!a.is_present());
        assert_eq!(a.action(), Action::NotArrived);
        assert_eq!(a.location(), Location::Outside);
        assert!(!a.is_idle());
    }

    #[test]
    fn arrive_then_idle_at_gate() {
        let mut a = agent();
        a.arrive_at_park(Minute(12));
        assert!(a.is_idle());
        assert_eq!(a.arrival(), Some(Minute(12)));
        assert_eq!(a.location(), Location::Gate);
        assert_eq!(a.log().len(), 1);
    }

    #[test]
    fn ride_cycle_counts_completion() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        a.enter_queue(AttractionId(1), "Coaster", Minute(1));
        assert_eq!(a.action(), Action::Queueing);
        assert!(!a.is_idle());

        assert!(!a.agent_boarded_attraction(AttractionId(1), "Coaster", Minute(5)));
        assert_eq!(a.action(), Action::Riding);
        a.agent_exited_attraction(AttractionId(1), "Coaster", Minute(10));
        assert!(a.is_idle());
        assert_eq!(a.rides_completed(AttractionId(1)), 1);
        assert_eq!(a.total_rides(), 1);
        assert_eq!(a.distinct_rides(), 1);
    }

    #[test]
    fn exit_from_other_ride_keeps_current_state() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        a.agent_boarded_attraction(AttractionId(0), "Teacups", Minute(1));
        a.agent_boarded_attraction(AttractionId(2), "Flume", Minute(2));
        a.agent_exited_attraction(AttractionId(0), "Teacups", Minute(3));
        assert_eq!(a.action(), Action::Riding);
        assert_eq!(a.location(), Location::Attraction(AttractionId(2)));
        assert_eq!(a.rides_completed(AttractionId(0)), 1);
    }

    #[test]
    fn transitions_reset_time_at_location() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        a.pass_time();
        a.pass_time();
        assert_eq!(a.time_at_location(), 2);
        a.begin_activity(ActivityId(0), "Shops", Minute(2));
        assert_eq!(a.time_at_location(), 0);
    }

    #[test]
    fn activity_time_is_accumulated() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        a.begin_activity(ActivityId(1), "Shops", Minute(0));
        for _ in 0..7 {
            a.pass_time();
        }
        a.agent_exited_activity(ActivityId(1), "Shops", Minute(7));
        assert!(a.is_idle());
        assert_eq!(a.activity_visits(), &[0, 1]);
        assert_eq!(a.activity_minutes(), &[0, 7]);
    }

    #[test]
    fn pass_lifecycle() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        assert!(a.get_pass(AttractionId(2), "Flume", Minute(3)));
        assert_eq!(a.action(), Action::GettingPass);
        a.assign_expedited_return_time(AttractionId(2), 25, Minute(3));
        assert!(a.is_idle());
        assert_eq!(a.passes().deadlines(), vec![25]);

        a.pass_time();
        assert_eq!(a.passes().deadlines(), vec![24]);

        assert!(a.agent_boarded_attraction(AttractionId(2), "Flume", Minute(20)));
        assert!(a.passes().is_empty());
    }

    #[test]
    fn duplicate_pass_rejected() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        assert!(a.get_pass(AttractionId(1), "Coaster", Minute(1)));
        a.assign_expedited_return_time(AttractionId(1), 10, Minute(1));
        let log_len = a.log().len();
        assert!(!a.get_pass(AttractionId(1), "Coaster", Minute(2)));
        assert_eq!(a.passes().len(), 1);
        assert_eq!(a.log().len(), log_len);
        assert!(a.is_idle());
    }

    #[test]
    fn return_pass_then_leave() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        a.get_pass(AttractionId(0), "Teacups", Minute(1));
        a.assign_expedited_return_time(AttractionId(0), 40, Minute(1));
        assert!(a.return_pass(AttractionId(0), "Teacups", Minute(5)));
        assert!(!a.return_pass(AttractionId(0), "Teacups", Minute(5)));
        a.leave_park(Minute(5));
        assert!(!a.is_present());
        assert_eq!(a.action(), Action::Leaving);
        assert_eq!(a.exit(), Some(Minute(5)));

        // Time no longer passes once outside.
        a.pass_time();
        assert_eq!(a.time_at_location(), 0);
    }

    #[test]
    fn deadlines_can_go_negative() {
        let mut a = agent();
        a.arrive_at_park(Minute(0));
        a.get_pass(AttractionId(0), "Teacups", Minute(0));
        a.assign_expedited_return_time(AttractionId(0), 1, Minute(0));
        a.pass_time();
        a.pass_time();
        assert_eq!(a.passes().deadlines(), vec![-1]);
        assert!(a.passes().contains(AttractionId(0)));
    }

    #[test]
    fn held_passes_stay_unique() {
        let mut passes = HeldPasses::default();
        assert!(passes.insert(HeldPass { attraction: AttractionId(0), return_in: 5 }));
        assert!(passes.insert(HeldPass { attraction: AttractionId(1), return_in: 9 }));
        assert!(!passes.insert(HeldPass { attraction: AttractionId(0), return_in: 1 }));
        assert_eq!(passes.attractions(), vec![AttractionId(0), AttractionId(1)]);
        assert_eq!(passes.deadlines(), vec![5, 9]);
        assert_eq!(passes.remove(AttractionId(0)).map(|p| p.return_in), Some(5));
        assert_eq!(passes.deadlines(), vec![9]);
    }
}

// ── Profiles and archetypes ───────────────────────────────────────────────────

#[cfg(test)]
mod archetype {
    use crate::{AgeClass, AgentError, ArchetypeMix, ArchetypeParams, ArchetypeTable};

    fn params(name: &str, ages: [f64; 3]) -> ArchetypeParams {
        ArchetypeParams {
            name:                   name.into(),
            stay_time_preference:   300.0,
            allow_repeats:          false,
            attraction_preference:  0.5,
            wait_threshold:         60,
            percent_no_child_rides: ages[0],
            percent_no_adult_rides: ages[1],
            percent_no_preference:  ages[2],
        }
    }

    #[test]
    fn age_class_filters() {
        // (child_eligible, adult_eligible)
        assert!(AgeClass::NoChildRides.admits(false, true));
        assert!(AgeClass::NoChildRides.admits(true, true));
        assert!(!AgeClass::NoChildRides.admits(true, false));
        assert!(AgeClass::NoAdultRides.admits(true, false));
        assert!(!AgeClass::NoAdultRides.admits(false, true));
        assert!(AgeClass::NoPreference.admits(false, false));
    }

    #[test]
    fn standard_table_is_valid() {
        let table = ArchetypeTable::standard();
        assert_eq!(table.len(), 6);
        table.validate().unwrap();
        assert_eq!(table.get("park_tourer").unwrap().wait_threshold, 360);
    }

    #[test]
    fn age_sum_tolerance() {
        assert!(params("a", [0.33, 0.33, 0.33]).validate().is_ok());
        assert!(params("a", [0.1, 0.2, 0.7]).validate().is_ok());
        assert!(matches!(
            params("a", [0.3, 0.3, 0.3]).validate(),
            Err(AgentError::AgeClassSum { .. })
        ));
        assert!(params("a", [0.5, 0.5, 0.1]).validate().is_err());
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = ArchetypeTable::new(vec![params("a", [0.0, 1.0, 0.0]), params("a", [1.0, 0.0, 0.0])]);
        assert!(matches!(result, Err(AgentError::DuplicateArchetype(_))));
    }

    #[test]
    fn mix_must_sum_to_hundred() {
        let table = ArchetypeTable::standard();
        let ok = ArchetypeMix::from_pairs([("ride_favorer", 50.0), ("park_tourer", 50.0)]);
        assert!(ok.validate(&table).is_ok());
        let short = ArchetypeMix::from_pairs([("ride_favorer", 50.0), ("park_tourer", 40.0)]);
        assert!(matches!(short.validate(&table), Err(AgentError::MixSum(_))));
        let unknown = ArchetypeMix::from_pairs([("ghost", 100.0)]);
        assert!(matches!(unknown.validate(&table), Err(AgentError::UnknownArchetype(_))));
    }

    #[test]
    fn table_and_mix_deserialize() {
        let json = r#"[{
            "name": "family", "stay_time_preference": 300, "allow_repeats": true,
            "attraction_preference": 0.5, "wait_threshold": 45,
            "percent_no_child_rides": 0.0, "percent_no_adult_rides": 0.5,
            "percent_no_preference": 0.5
        }]"#;
        let table: ArchetypeTable = serde_json::from_str(json).unwrap();
        table.validate().unwrap();
        let mix: ArchetypeMix =
            serde_json::from_str(r#"[{"archetype": "family", "percent": 100}]"#).unwrap();
        mix.validate(&table).unwrap();
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use park_core::{AgentId, ExpeditedPolicy};

    use crate::{AgeClass, AgentError, ArchetypeMix, ArchetypeParams, ArchetypeTable, PopulationBuilder};

    fn table(ages: [f64; 3]) -> ArchetypeTable {
        ArchetypeTable::new(vec![ArchetypeParams {
            name:                   "solo".into(),
            stay_time_preference:   240.0,
            allow_repeats:          true,
            attraction_preference:  0.7,
            wait_threshold:         30,
            percent_no_child_rides: ages[0],
            percent_no_adult_rides: ages[1],
            percent_no_preference:  ages[2],
        }])
        .unwrap()
    }

    fn solo_mix() -> ArchetypeMix {
        ArchetypeMix::from_pairs([("solo", 100.0)])
    }

    #[test]
    fn boundary_age_class_is_exact() {
        let (agents, _) = PopulationBuilder::new(3)
            .archetypes(table([0.0, 1.0, 0.0]))
            .mix(solo_mix())
            .build(500)
            .unwrap();
        assert!(agents.iter().all(|a| a.profile().age_class == AgeClass::NoAdultRides));
    }

    #[test]
    fn ids_are_sequential_and_rngs_aligned() {
        let (agents, rngs) = PopulationBuilder::new(3)
            .archetypes(table([0.2, 0.3, 0.5]))
            .mix(solo_mix())
            .venues(4, 2)
            .build(50)
            .unwrap();
        for (i, (agent, rng)) in agents.iter().zip(&rngs).enumerate() {
            assert_eq!(agent.id(), AgentId(i as u32));
            assert_eq!(rng.agent(), agent.id());
            assert_eq!(agent.rides().len(), 4);
            assert_eq!(agent.activity_visits().len(), 2);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let build = |seed| {
            PopulationBuilder::new(seed)
                .mix(ArchetypeMix::from_pairs([
                    ("ride_enthusiast", 30.0),
                    ("park_visitor", 30.0),
                    ("activity_enthusiast", 40.0),
                ]))
                .expedited(ExpeditedPolicy { ability_pct: 0.5, wait_threshold: 20, limit: 1 })
                .build(200)
                .unwrap()
                .0
        };
        let a = build(11);
        let b = build(11);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.profile(), y.profile());
        }
        let c = build(12);
        assert!(a.iter().zip(&c).any(|(x, y)| x.profile() != y.profile()));
    }

    #[test]
    fn expedited_ability_follows_fraction() {
        let build = |pct| {
            PopulationBuilder::new(5)
                .archetypes(table([0.0, 0.0, 1.0]))
                .mix(solo_mix())
                .expedited(ExpeditedPolicy { ability_pct: pct, wait_threshold: 20, limit: 1 })
                .build(1000)
                .unwrap()
                .0
        };
        assert!(build(0.0).iter().all(|a| !a.profile().expedited_ability));
        assert!(build(1.0).iter().all(|a| a.profile().expedited_ability));
        let half = build(0.5).iter().filter(|a| a.profile().expedited_ability).count();
        assert!((400..600).contains(&half), "got {half}");
    }

    #[test]
    fn stay_preference_is_non_negative_and_centered() {
        let (agents, _) = PopulationBuilder::new(9)
            .archetypes(table([0.0, 0.0, 1.0]))
            .mix(solo_mix())
            .build(2000)
            .unwrap();
        let mean = agents.iter().map(|a| a.profile().stay_time_preference as f64).sum::<f64>()
            / agents.len() as f64;
        assert!((mean - 240.0).abs() < 10.0, "mean {mean}");
    }

    #[test]
    fn invalid_mix_fails_build() {
        let result = PopulationBuilder::new(0)
            .mix(ArchetypeMix::from_pairs([("ride_favorer", 99.0)]))
            .build(10);
        assert!(matches!(result, Err(AgentError::MixSum(_))));

        let result = PopulationBuilder::new(0)
            .mix(ArchetypeMix::from_pairs([("ride_favorer", 100.0)]))
            .expedited(ExpeditedPolicy { ability_pct: 2.0, wait_threshold: 0, limit: 0 })
            .build(10);
        assert!(matches!(result, Err(AgentError::Core(_))));
    }
}
