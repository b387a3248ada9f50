//! palm_pet — interactive entry point.

use palm_pet::app::run;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Palm Pet — a hand-tracked virtual pet toy             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Mouse/keyboard simulation  (use --features leap for hardware)");
    println!();
    println!("  Point to lead the pet, pinch to size it, touch a word for a");
    println!("  color wash, open your hand wide for fireworks.");
    println!();
    println!("  Opening window…");
    println!();

    if let Err(e) = run() {
        eprintln!("[palm_pet] Error: {}", e);
        std::process::exit(1);
    }
}
