//! Node.js version and npm profile detection.
//!
//! Each detector inspects one project artifact. The service runs them in
//! priority order and stops at the first hit:
//!
//! | Priority | Version source            | Profile source       |
//! |----------|---------------------------|----------------------|
//! | 0        | `.autonode.yml`           |                      |
//! | 1        | `.nvmrc`                  | `.autonode.yml`      |
//! | 2        | `.node-version`           | `package.json`       |
//! | 3        | `package.json` engines    |                      |
//! | 4        | `Dockerfile`              |                      |

pub mod autonode_yml;
pub mod dockerfile;
pub mod package_json;
pub mod types;
pub mod version_file;

pub use autonode_yml::{AutonodeYmlProfileDetector, AutonodeYmlVersionDetector};
pub use dockerfile::DockerfileDetector;
pub use package_json::{normalize_version_spec, PackageJsonDetector, PackageJsonProfileDetector};
pub use types::{DetectionResult, ProfileDetectionResult, ProfileDetector, VersionDetector};
pub use version_file::VersionFileDetector;

use crate::releases::CodenameResolver;

/// All built-in version detectors.
pub fn default_version_detectors(
    resolver: Box<dyn CodenameResolver>,
) -> Vec<Box<dyn VersionDetector>> {
    vec![
        Box::new(AutonodeYmlVersionDetector),
        Box::new(VersionFileDetector::nvmrc()),
        Box::new(VersionFileDetector::node_version()),
        Box::new(PackageJsonDetector),
        Box::new(DockerfileDetector::new(resolver)),
    ]
}

/// All built-in profile detectors.
pub fn default_profile_detectors() -> Vec<Box<dyn ProfileDetector>> {
    vec![
        Box::new(AutonodeYmlProfileDetector),
        Box::new(PackageJsonProfileDetector),
    ]
}
