use std::{
    env,
    fs,
    io::ErrorKind,
    path::{Path as StdPath, PathBuf as StdPathBuf},
};

use super::*;

fn cranky_does_exist(path: &StdPath) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(x) if x.kind() == ErrorKind::NotFound => false,
        Err(x) => {
            log::error!("{:?}: {:?}", path, x);
            false
        },
    }
}

/// Finds `Capitalized` or `lowercase` under `dir`, preferring the former.
fn find_either(dir: &StdPath, capitalized: &str, lowercase: &str)
    -> Option<StdPathBuf> {
    let mut pb: StdPathBuf = dir.join(capitalized);
    if !cranky_does_exist(&pb) {
        pb.pop();
        pb.push(lowercase);
        if !cranky_does_exist(&pb) {
            return None
        }
    }
    Some(pb)
}

fn try_mods_dir(overlay: &mut Overlay, data_dir: &StdPath) {
    let pb = match find_either(data_dir, "Mods", "mods") {
        Some(x) => x,
        None => {
            log::info!("No mods directory found under {:?}", data_dir);
            return
        },
    };
    match overlay.add_root_containers_in(&pb) {
        Ok(count) => log::info!("{} mods found in {:?}", count, pb),
        Err(x) => log::error!("{:?}: {}", pb, x),
    }
}

fn try_data_dir(overlay: &mut Overlay, us_dir: &StdPath) {
    let pb = match find_either(us_dir, "Data", "data") {
        Some(x) => x,
        None => {
            // Neither exists, quietly give up
            log::info!("No data directory found under {:?}", us_dir);
            return
        },
    };
    if let Err(x) = overlay.add_root_container(&pb) {
        log::error!("{:?}: {}", pb, x);
        return
    }
    log::info!("Data directory found: {:?}", pb);
    try_mods_dir(overlay, &pb);
}

fn get_us_dir() -> StdPathBuf {
    match std::env::current_exe() {
        Ok(mut x) => {
            if x.pop() {
                x
            }
            else {
                ".".into()
            }
        },
        Err(x) => {
            log::warn!("Couldn't get the path to our own executable! {:?}",
                       x);
            log::warn!("Assuming it's in the working directory.");
            ".".into()
        },
    }
}

fn do_standard_containers(overlay: &mut Overlay, unixy_name: &str) {
    let mut us_dir = get_us_dir();
    if cfg!(target_family="unix")
        && us_dir.file_name().map(|x| x == "bin").unwrap_or(false) {
        // We're in a `bin` directory, a UNIX-style systemwide installation.
        // For: .../bin/our_exe
        // Use: .../share/unixy_name/data
        us_dir.pop();
        us_dir.push("share");
        us_dir.push(unixy_name);
    }
    else if us_dir.parent().and_then(StdPath::file_name)
        .map(|x| x == "target").unwrap_or(false) {
        // We're in a `target` directory, a Cargo project being executed in
        // the place where it was built.
        // For: .../target/.../our_exe
        // Use: .../data
        us_dir.pop();
        us_dir.pop();
    }
    try_data_dir(overlay, &us_dir);
    if !cfg!(target_family="unix") { return }
    // If HOME isn't set, act as though it were empty, like an XDG-compliant
    // shell script would.
    let home: StdPathBuf = env::var_os("HOME")
        .filter(|x| !x.is_empty()).map(StdPathBuf::from)
        .unwrap_or_else(|| "/".into());
    // If XDG_DATA_DIRS is unset, XDG says to look in /usr/local/share
    // and /usr/share, but the `bin` logic above already covers those.
    if let Some(list) = env::var_os("XDG_DATA_DIRS").filter(|x| !x.is_empty()) {
        let paths: Vec<StdPathBuf> = env::split_paths(&list)
            .filter(|x| !x.as_os_str().is_empty()).collect();
        // Later containers take priority, and the first entry is the most
        // important one.
        for mut path in paths.into_iter().rev() {
            path.push(unixy_name);
            try_data_dir(overlay, &path);
        }
    }
    let mut xdg_data_home: StdPathBuf = env::var_os("XDG_DATA_HOME")
        .filter(|x| !x.is_empty()).map(StdPathBuf::from)
        .unwrap_or_else(|| home.join(".local").join("share"));
    xdg_data_home.push(unixy_name);
    try_data_dir(overlay, &xdg_data_home);
}

impl Overlay {
    /// Creates an overlay from the standard locations for an application's
    /// data, in increasing order of priority:
    ///
    /// - The `Data` (or `data`) directory next to the executable. For an
    ///   executable in a `bin` directory, `../share/<unixy_name>/data`
    ///   instead. For one built by Cargo under `target/`, the project's own
    ///   `data` directory.
    /// - On UNIX, `<unixy_name>/data` in each of `XDG_DATA_DIRS` (lowest
    ///   priority last in the list), then `$XDG_DATA_HOME/<unixy_name>/data`.
    ///
    /// Right after each data directory is added, every package in its `Mods`
    /// (or `mods`) subdirectory is added with
    /// [`add_root_containers_in`](#method.add_root_containers_in).
    ///
    /// Locations that don't exist are skipped. Locations that fail to load
    /// are logged and skipped.
    ///
    /// Each data directory is added whole, `Mods` subdirectory included, so
    /// the raw contents of every mod also appear under `Mods/` (or `mods/`)
    /// in the overlay. A mod directory holding `Textures/Sky.dds` overrides
    /// `Textures/Sky.dds`, and is additionally visible as
    /// `Mods/<mod>/Textures/Sky.dds`.
    pub fn with_standard_paths(unixy_name: &str) -> Overlay {
        let mut ret = Overlay::new();
        do_standard_containers(&mut ret, unixy_name);
        ret
    }
    /// Adds every file (as an archive) and directory directly inside `dir`
    /// as a root container, in file name order, so a package overrides the
    /// ones whose names sort before its own. Packages that fail to load are
    /// logged and skipped.
    ///
    /// Returns the number of packages added.
    pub fn add_root_containers_in(&mut self, dir: impl AsRef<StdPath>)
        -> Result<usize> {
        let dir = dir.as_ref();
        let listing = fs::read_dir(dir).map_err(|x| Error::InvalidContainer {
            path: dir.to_owned(),
            source: x.into(),
        })?;
        let mut packages: Vec<StdPathBuf> = listing
            .filter_map(|x| match x {
                Ok(x) => Some(x.path()),
                Err(x) => {
                    log::warn!("{:?}: {:?}", dir, x);
                    None
                },
            }).collect();
        packages.sort();
        let mut count = 0;
        for package in packages {
            match self.add_root_container(&package) {
                Ok(()) => count += 1,
                Err(x) => log::error!("{:?}: {}", package, x),
            }
        }
        Ok(count)
    }
}
