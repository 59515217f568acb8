#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fql_builder::SymbolGenerator;

    // ========================================================================
    // Sequential Generation Tests
    // ========================================================================

    #[test]
    fn test_first_symbol_is_numbered_one() {
        let symbols = SymbolGenerator::new();
        assert_eq!(symbols.generate("map"), "map_1");
    }

    #[test]
    fn test_counter_is_shared_across_prefixes() {
        let symbols = SymbolGenerator::new();
        assert_eq!(symbols.generate("map"), "map_1");
        assert_eq!(symbols.generate("filter"), "filter_2");
        assert_eq!(symbols.generate("map"), "map_3");
        assert_eq!(symbols.issued(), 3);
    }

    #[test]
    fn test_starting_at_offsets_counter() {
        let symbols = SymbolGenerator::starting_at(41);
        assert_eq!(symbols.generate("x"), "x_42");
    }

    #[test]
    fn test_empty_prefix() {
        let symbols = SymbolGenerator::default();
        assert_eq!(symbols.generate(""), "_1");
    }

    #[test]
    fn test_generators_are_independent() {
        let a = SymbolGenerator::new();
        let b = SymbolGenerator::new();
        assert_eq!(a.generate("s"), "s_1");
        assert_eq!(b.generate("s"), "s_1");
    }

    #[test]
    fn test_digit_suffixed_prefixes_do_not_collide() {
        let symbols = SymbolGenerator::new();
        let mut generated = vec![symbols.generate("x1")];
        for _ in 0..10 {
            generated.push(symbols.generate("y"));
        }
        generated.push(symbols.generate("x"));

        assert_eq!(generated[0], "x1_1");
        assert_eq!(generated[11], "x_12");
        let unique: HashSet<&String> = generated.iter().collect();
        assert_eq!(unique.len(), generated.len());
    }

    #[test]
    fn test_symbol_splits_back_into_prefix_and_number() {
        let symbols = SymbolGenerator::starting_at(6);
        let symbol = symbols.generate("tag_2");
        assert_eq!(symbol.rsplit_once('_'), Some(("tag_2", "7")));
    }

    #[test]
    fn test_global_generator_never_repeats() {
        let first = SymbolGenerator::global().generate("g");
        let second = SymbolGenerator::global().generate("g");
        assert_ne!(first, second);
    }

    // ========================================================================
    // Concurrency Tests
    // ========================================================================

    #[test]
    fn test_concurrent_symbols_are_unique() {
        let symbols = SymbolGenerator::new();
        let threads = 8;
        let per_thread = 250;

        let all: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    s.spawn(|| {
                        (0..per_thread)
                            .map(|_| symbols.generate("sym"))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(all.len(), threads * per_thread);
        assert_eq!(unique.len(), threads * per_thread);
        assert_eq!(symbols.issued(), (threads * per_thread) as u64);
    }

    #[test]
    fn test_concurrent_global_symbols_are_unique() {
        let all: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        (0..300)
                            .map(|_| SymbolGenerator::global().generate("map"))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), 1200);
    }
}
