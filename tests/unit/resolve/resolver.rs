use super::*;
use crate::layers::model::LayerDecl;

fn resolver(layers: Vec<LayerSpec>, opts: ResolverOpts) -> Resolver {
    Resolver::new(layers, opts).unwrap()
}

fn single(r: &Resolver, key: &str, slot: Option<u32>) -> u32 {
    r.ordinal(key, slot).unwrap().get()
}

fn reversed() -> ResolverOpts {
    ResolverOpts {
        start: 1,
        reverse: true,
    }
}

#[test]
fn flat_layers_are_contiguous_from_one() {
    let r = Resolver::new(["modal", "alert", "toast", "tooltip"], ResolverOpts::default()).unwrap();
    assert_eq!(single(&r, "modal", None), 1);
    assert_eq!(single(&r, "alert", None), 2);
    assert_eq!(single(&r, "toast", None), 3);
    assert_eq!(single(&r, "tooltip", None), 4);
}

#[test]
fn structured_records_behave_like_names() {
    let r = resolver(
        vec![LayerDecl::new("modal").into(), LayerDecl::new("alert").into()],
        ResolverOpts::default(),
    );
    assert_eq!(single(&r, "modal", None), 1);
    assert_eq!(single(&r, "alert", None), 2);
}

#[test]
fn slots_consume_consecutive_ordinals() {
    let r = resolver(
        vec!["modal".into(), LayerDecl::new("alert").slots(3).into(), "toast".into()],
        ResolverOpts::default(),
    );
    assert_eq!(single(&r, "modal", None), 1);
    assert_eq!(single(&r, "alert", Some(0)), 2);
    assert_eq!(single(&r, "alert", Some(1)), 3);
    assert_eq!(single(&r, "alert", Some(2)), 4);
    assert_eq!(single(&r, "toast", None), 5);
    // No slot means slot 0.
    assert_eq!(single(&r, "alert", None), 2);
}

#[test]
fn parts_resolve_individually_and_fan_out() {
    let r = resolver(
        vec![
            "modal".into(),
            LayerDecl::new("alert").parts(["background", "content"]).into(),
            "toast".into(),
        ],
        ResolverOpts::default(),
    );
    assert_eq!(single(&r, "modal", None), 1);
    assert_eq!(single(&r, "alert.background", None), 2);
    assert_eq!(single(&r, "alert.content", None), 3);
    assert_eq!(single(&r, "toast", None), 4);

    let fan = r.resolve("alert", None).unwrap();
    let parts = fan.as_parts().unwrap();
    assert_eq!(parts.get("background"), Some(Ordinal(2)));
    assert_eq!(parts.get("content"), Some(Ordinal(3)));
    assert!(r.ordinal("alert", None).is_err());
}

#[test]
fn single_part_layer_still_fans_out() {
    let r = resolver(
        vec!["modal".into(), LayerDecl::new("alert").parts(["body"]).into()],
        ResolverOpts::default(),
    );
    let fan = r.resolve("alert", None).unwrap();
    assert_eq!(fan.as_parts().unwrap().get("body"), Some(Ordinal(2)));
    assert_eq!(single(&r, "alert.body", None), 2);
}

#[test]
fn parts_and_slots_are_slot_major() {
    let r = resolver(
        vec![
            "modal".into(),
            LayerDecl::new("alert")
                .parts(["background", "content"])
                .slots(3)
                .into(),
            "toast".into(),
        ],
        ResolverOpts::default(),
    );
    let expected = [
        ("alert.background", 0, 2),
        ("alert.content", 0, 3),
        ("alert.background", 1, 4),
        ("alert.content", 1, 5),
        ("alert.background", 2, 6),
        ("alert.content", 2, 7),
    ];
    for (key, slot, ordinal) in expected {
        assert_eq!(single(&r, key, Some(slot)), ordinal, "{key} with slot {slot}");
    }
    assert_eq!(single(&r, "toast", None), 8);

    let fan = r.resolve("alert", Some(1)).unwrap();
    let parts = fan.as_parts().unwrap();
    assert_eq!(parts.get("background"), Some(Ordinal(4)));
    assert_eq!(parts.get("content"), Some(Ordinal(5)));
}

#[test]
fn custom_start_shifts_everything() {
    let r = Resolver::new(
        ["modal", "alert"],
        ResolverOpts {
            start: 100,
            reverse: false,
        },
    )
    .unwrap();
    assert_eq!(single(&r, "modal", None), 100);
    assert_eq!(single(&r, "alert", None), 101);
}

#[test]
fn start_zero_is_allowed() {
    let r = Resolver::new(
        ["base", "top"],
        ResolverOpts {
            start: 0,
            reverse: false,
        },
    )
    .unwrap();
    assert_eq!(single(&r, "base", None), 0);
    assert_eq!(single(&r, "top", None), 1);
}

#[test]
fn reverse_inverts_flat_layers() {
    let r = Resolver::new(["modal", "alert", "toast", "tooltip"], reversed()).unwrap();
    assert_eq!(single(&r, "modal", None), 4);
    assert_eq!(single(&r, "alert", None), 3);
    assert_eq!(single(&r, "toast", None), 2);
    assert_eq!(single(&r, "tooltip", None), 1);
}

#[test]
fn reverse_inverts_parts_but_not_slots() {
    let r = resolver(
        vec![
            "toast".into(),
            LayerDecl::new("alert")
                .parts(["content", "background"])
                .slots(3)
                .into(),
            "modal".into(),
        ],
        reversed(),
    );
    assert_eq!(single(&r, "modal", None), 1);
    assert_eq!(single(&r, "alert.background", Some(0)), 2);
    assert_eq!(single(&r, "alert.content", Some(0)), 3);
    assert_eq!(single(&r, "alert.background", Some(1)), 4);
    assert_eq!(single(&r, "alert.content", Some(1)), 5);
    assert_eq!(single(&r, "alert.background", Some(2)), 6);
    assert_eq!(single(&r, "alert.content", Some(2)), 7);
    assert_eq!(single(&r, "toast", None), 8);
}

#[test]
fn reverse_fan_out_lists_parts_in_effective_order() {
    let r = resolver(
        vec![
            "toast".into(),
            LayerDecl::new("alert")
                .parts(["content", "background"])
                .slots(2)
                .into(),
            "modal".into(),
        ],
        reversed(),
    );

    let fan = r.resolve("alert", None).unwrap();
    let parts: Vec<(&str, u32)> = fan
        .as_parts()
        .unwrap()
        .iter()
        .map(|(name, ordinal)| (name, ordinal.get()))
        .collect();
    assert_eq!(parts, [("background", 2), ("content", 3)]);

    let fan = r.resolve("alert", Some(1)).unwrap();
    let parts: Vec<(&str, u32)> = fan
        .as_parts()
        .unwrap()
        .iter()
        .map(|(name, ordinal)| (name, ordinal.get()))
        .collect();
    assert_eq!(parts, [("background", 4), ("content", 5)]);

    let json = serde_json::to_string(&r.resolve("alert", None).unwrap()).unwrap();
    assert!(json.starts_with(r#"{"ordinal":{"background":2,"content":3}"#), "{json}");
}

#[test]
fn dotted_layer_keys_resolve_whole_or_split_at_last_dot() {
    let r = resolver(
        vec![
            "modal.test".into(),
            LayerDecl::new("alert.test")
                .parts(["background", "content"])
                .slots(3)
                .into(),
            "toast.test".into(),
        ],
        ResolverOpts::default(),
    );
    assert_eq!(single(&r, "modal.test", None), 1);
    assert_eq!(single(&r, "alert.test.background", Some(0)), 2);
    assert_eq!(single(&r, "alert.test.content", Some(0)), 3);
    assert_eq!(single(&r, "alert.test.background", Some(1)), 4);
    assert_eq!(single(&r, "alert.test.content", Some(2)), 7);
    assert_eq!(single(&r, "toast.test", None), 8);
}

#[test]
fn unknown_layer_is_rejected() {
    let r = Resolver::new(["foo", "bar"], ResolverOpts::default()).unwrap();
    let err = r.resolve("invalid", None).unwrap_err();
    assert!(matches!(err, StrataError::UnknownLayer { ref key } if key == "invalid"));

    let err = r.resolve("nope.part", None).unwrap_err();
    assert!(matches!(err, StrataError::UnknownLayer { ref key } if key == "nope"));
}

#[test]
fn unknown_part_is_rejected() {
    let r = resolver(
        vec![LayerDecl::new("foo").parts(["bar"]).into(), "plain".into()],
        ResolverOpts::default(),
    );
    let err = r.resolve("foo.invalid", None).unwrap_err();
    assert!(matches!(err, StrataError::UnknownPart { ref part, .. } if part == "invalid"));

    // A layer without parts has no addressable parts at all.
    let err = r.resolve("plain.x", None).unwrap_err();
    assert!(matches!(err, StrataError::UnknownPart { .. }));
}

#[test]
fn slot_without_capacity_is_rejected() {
    let r = Resolver::new(["foo", "bar"], ResolverOpts::default()).unwrap();
    let err = r.resolve("foo", Some(2)).unwrap_err();
    assert!(matches!(err, StrataError::SlotWithoutCapacity { slot: 2, .. }));
    assert!(err.to_string().contains("without slots"));

    // Slot 0 is still a slot.
    assert!(r.resolve("foo", Some(0)).is_err());
}

#[test]
fn slot_past_capacity_is_rejected() {
    let r = resolver(
        vec![LayerDecl::new("alert").slots(3).into(), "toast".into()],
        ResolverOpts::default(),
    );
    let err = r.resolve("alert", Some(3)).unwrap_err();
    assert!(matches!(
        err,
        StrataError::SlotOutOfRange {
            slot: 3,
            slots: 3,
            ..
        }
    ));
}

#[test]
fn invalid_configuration_fails_construction() {
    assert!(Resolver::new(["a", "a"], ResolverOpts::default()).is_err());

    let none: [&str; 0] = [];
    assert!(Resolver::new(none, ResolverOpts::default()).is_err());
    let config = LayerSetConfig::from_json_str(r#"{ "layers": [] }"#).unwrap();
    assert!(Resolver::from_config(&config).is_err());
}

#[test]
fn repeated_queries_are_identical() {
    let r = resolver(
        vec![LayerDecl::new("alert").parts(["a", "b"]).slots(2).into()],
        ResolverOpts::default(),
    );
    let first = r.resolve("alert", Some(1)).unwrap();
    for _ in 0..3 {
        assert_eq!(r.resolve("alert", Some(1)).unwrap(), first);
    }
}

#[test]
fn units_table_matches_queries() {
    let r = resolver(
        vec![
            "modal".into(),
            LayerDecl::new("alert")
                .parts(["background", "content"])
                .slots(2)
                .into(),
            "toast".into(),
        ],
        ResolverOpts {
            start: 10,
            reverse: false,
        },
    );
    let units = r.units();
    assert_eq!(units.len() as u64, r.total_units());
    assert_eq!(r.total_units(), 6);

    for (i, unit) in units.iter().enumerate() {
        assert_eq!(unit.ordinal.get(), 10 + i as u32);
        assert_eq!(r.ordinal(&unit.query_key(), unit.slot).unwrap(), unit.ordinal);
    }
    assert_eq!(units[0].slot, None);
    assert_eq!(units[3].query_key(), "alert.background");
    assert_eq!(units[3].slot, Some(1));
}

#[test]
fn keys_lists_every_queryable_key() {
    let r = resolver(
        vec!["modal".into(), LayerDecl::new("alert").parts(["bg", "fg"]).into()],
        ResolverOpts::default(),
    );
    assert_eq!(r.keys(), ["modal", "alert", "alert.bg", "alert.fg"]);
    for key in r.keys() {
        assert!(r.resolve(&key, None).is_ok(), "{key}");
    }
}

#[test]
fn fingerprint_tracks_configuration() {
    let a = Resolver::new(["modal", "alert"], ResolverOpts::default()).unwrap();
    let b = Resolver::new(["modal", "alert"], ResolverOpts::default()).unwrap();
    let c = Resolver::new(["modal", "alert"], reversed()).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn resolver_is_shareable_across_threads() {
    let r = std::sync::Arc::new(
        Resolver::new(["modal", "alert", "toast"], ResolverOpts::default()).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = std::sync::Arc::clone(&r);
            std::thread::spawn(move || r.ordinal("toast", None).unwrap().get())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}
