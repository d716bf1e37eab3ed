use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Backend tiers the crate can compile in
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
enum Tier {
    Native,
    Portable,
    Scalar,
}

impl Tier {
    fn cfg_value(self) -> &'static str {
        match self {
            Tier::Native => "native",
            Tier::Portable => "portable",
            Tier::Scalar => "scalar",
        }
    }

    fn parse(value: &str) -> Option<Tier> {
        match value.trim().to_ascii_lowercase().as_str() {
            "native" => Some(Tier::Native),
            "portable" => Some(Tier::Portable),
            "scalar" | "fallback" => Some(Tier::Scalar),
            _ => None,
        }
    }
}

// Target features that make the native tier worthwhile
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    arch: &'static [&'static str],
    enabled: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx2" => 0,
            "avx" => 1,
            "sse4.2" => 2,
            "sse4.1" => 3,
            "ssse3" => 4,
            "sse2" => 5,
            "neon" => 6,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all CPU features the native backend has instructions for
    fn features() -> Vec<CpuFeature> {
        const X86: &[&str] = &["x86", "x86_64"];
        vec![
            CpuFeature {
                name: "sse2",
                arch: X86,
                enabled: false,
            },
            CpuFeature {
                name: "ssse3",
                arch: X86,
                enabled: false,
            },
            CpuFeature {
                name: "sse4.1",
                arch: X86,
                enabled: false,
            },
            CpuFeature {
                name: "sse4.2",
                arch: X86,
                enabled: false,
            },
            CpuFeature {
                name: "avx",
                arch: X86,
                enabled: false,
            },
            CpuFeature {
                name: "avx2",
                arch: X86,
                enabled: false,
            },
            CpuFeature {
                name: "neon",
                arch: &["aarch64"],
                enabled: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reads the target configuration cargo hands to build scripts. This is the
// feature set the crate is *compiled* for, not the host CPU.
struct TargetConfig {
    arch: String,
    features: Vec<String>,
}

impl TargetConfig {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(|feature| feature.trim().to_string())
            .filter(|feature| !feature.is_empty())
            .collect();

        Self { arch, features }
    }

    fn mark_enabled(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.enabled = feature.arch.contains(&self.arch.as_str())
                && self.features.iter().any(|f| f == feature.name);
        }
    }
}

fn compiler_channel() -> String {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(rustc).args(["--version", "--verbose"]).output();

    match output {
        Ok(output) if String::from_utf8_lossy(&output.stdout).contains("nightly") => {
            "nightly".to_string()
        }
        _ => "stable".to_string(),
    }
}

fn select_tier(features: &mut [CpuFeature], nightly: bool) -> Tier {
    if env::var_os("CARGO_FEATURE_FORCE_SCALAR").is_some() {
        return Tier::Scalar;
    }

    if let Ok(requested) = env::var("SIMDPORT_BACKEND") {
        let tier = Tier::parse(&requested).unwrap_or_else(|| {
            panic!("SIMDPORT_BACKEND must be one of native, portable, scalar (got {requested:?})")
        });
        if tier == Tier::Portable && !nightly {
            panic!("SIMDPORT_BACKEND=portable requires a nightly toolchain");
        }
        return tier;
    }

    // Sort features by priority (highest first)
    features.sort();

    let best = features.iter().find(|feature| feature.enabled);
    match (best, nightly) {
        (Some(feature), _) => {
            println!("applying: native ({})", feature.name);
            Tier::Native
        }
        (None, true) => Tier::Portable,
        (None, false) => Tier::Scalar,
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed=SIMDPORT_BACKEND");
    println!("cargo:rerun-if-changed=build.rs");

    // Detect rustc channel (stable, beta, nightly)
    let rustc_channel = compiler_channel();
    let nightly_build = rustc_channel == "nightly";

    println!("cargo:rustc-cfg=rustc_channel=\"{rustc_channel}\"");

    let mut features = CpuFeature::features();
    TargetConfig::from_env().mark_enabled(&mut features);

    let tier = select_tier(&mut features, nightly_build);
    println!("cargo:rustc-cfg=simdport_backend=\"{}\"", tier.cfg_value());

    // core::simd backs the generic tier, and is the next tier below native
    let portable = nightly_build && env::var_os("CARGO_FEATURE_FORCE_SCALAR").is_none();
    if portable && tier != Tier::Scalar {
        println!("cargo:rustc-cfg=simdport_portable");
    }

    // Disable flag warnings for build
    println!("cargo::rustc-check-cfg=cfg(rustc_channel, values(\"nightly\", \"stable\"))");
    println!(
        "cargo::rustc-check-cfg=cfg(simdport_backend, values(\"native\", \"portable\", \"scalar\"))"
    );
    println!("cargo::rustc-check-cfg=cfg(simdport_portable)");
}
