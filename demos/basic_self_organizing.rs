//! Basic example demonstrating self-organizing association list behavior.
//!
//! Every successful lookup of a non-head key bumps its access count; once the
//! count catches up with the head's, the key jumps to the front.

use freqlist::SelfOrganizingMap;

fn order<V>(map: &SelfOrganizingMap<&'static str, V>) -> Vec<&'static str> {
    map.keys().copied().collect()
}

fn main() {
    println!("=== Self-Organizing List Example ===\n");

    let mut map = SelfOrganizingMap::new();
    map.set("gamma", 3);
    map.set("beta", 2);
    map.set("alpha", 1);

    println!("Inserted gamma, beta, alpha (new keys go to the head)");
    println!("  order: {:?}", order(&map));
    println!("  len: {}\n", map.len());

    println!("Finding gamma...");
    println!("  value: {:?}", map.find("gamma"));
    println!("  count: {:?}", map.access_count("gamma"));
    println!("  order: {:?} (1 >= head's 0, promoted)\n", order(&map));

    println!("Finding beta once...");
    map.find("beta");
    println!("  count: {:?}", map.access_count("beta"));
    println!("  order: {:?} (promoted past gamma)\n", order(&map));

    println!("Finding beta again (head hit, free)...");
    map.find("beta");
    println!("  count: {:?} (unchanged)\n", map.access_count("beta"));

    println!("=== Threshold Behavior ===\n");

    let mut hot = SelfOrganizingMap::new();
    hot.set("cold", 0);
    hot.set("warm", 0);
    for i in 0..5 {
        hot.set("filler", i);
        hot.find("warm");
    }
    println!("Heated 'warm' to count {:?}", hot.access_count("warm"));
    println!("  order: {:?}\n", order(&hot));

    for round in 1..=5 {
        hot.find("cold");
        println!(
            "  find(cold) #{round}: count={:?} head={:?}",
            hot.access_count("cold"),
            hot.front().map(|(k, _)| *k)
        );
    }

    println!("\n=== Merge ===\n");

    let mut left: SelfOrganizingMap<&str, i32> = [("x", 1), ("z", 9)].into_iter().collect();
    let right: SelfOrganizingMap<&str, i32> = [("x", 2), ("y", 3)].into_iter().collect();
    left.merge(&right);
    println!("left.merge(&right):");
    for (k, v) in &left {
        println!("  {k} => {v}");
    }

    println!("\n=== Cold Copy ===\n");
    let copy = map.clone();
    let counts = |m: &SelfOrganizingMap<&str, i32>| -> Vec<u64> {
        m.keys().filter_map(|k| m.access_count(k)).collect()
    };
    println!("original counts: {:?}", counts(&map));
    println!("copy counts:     {:?}", counts(&copy));
    println!("{copy:?}");
}
