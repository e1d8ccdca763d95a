//! Basic list lifecycle example

use dynlist_core::{list_type, GrowthPolicy, ListConfig, Status};

#[derive(Debug, Clone, Default, PartialEq)]
struct Vector2 {
    x: i32,
    y: i32,
}

list_type!(#[derive(Debug)] Vector2List, Vector2);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Dynlist Basic Example\n");

    let mut points = Vector2List::new();
    println!("Fresh list status: {:?}", points.status());

    for i in 1..=5 {
        points.append(Vector2 { x: i * 10, y: -i })?;
        println!(
            "Appended point {}: len {}, capacity {}",
            i,
            points.len(),
            points.capacity()
        );
    }

    // A bounded list reports growth failures instead of aborting
    let mut bounded = Vector2List::with_config(
        ListConfig::new()
            .growth(GrowthPolicy::Exact)
            .max_elements(2),
    );
    for point in points.as_slice() {
        let _ = bounded.append(point.clone());
        if bounded.status() != Status::Ok {
            println!(
                "Bounded list refused a point: {:?} (code {})",
                bounded.status(),
                bounded.error_code()
            );
            break;
        }
    }

    points.deinit();
    bounded.deinit();
    println!("\nAfter deinit: len {}, allocated {}", points.len(), points.is_allocated());

    Ok(())
}
