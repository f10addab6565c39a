use dockerize_core::{BuildConfig, BuildMetadata};

/// Which Dockerfile to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Compile inside the container from the Go toolchain image.
    #[default]
    Standard,
    /// Ship a binary cross-compiled on the host in an empty image.
    Scratch,
}

impl BuildMode {
    pub fn from_scratch_flag(scratch: bool) -> Self {
        if scratch { Self::Scratch } else { Self::Standard }
    }
}

/// Renders one of the two fixed Dockerfile templates.
pub struct DockerfileGenerator<'a> {
    config: &'a BuildConfig,
    meta: &'a BuildMetadata,
    root_env: &'a str,
    mode: BuildMode,
}

impl<'a> DockerfileGenerator<'a> {
    /// `root_env` names the module-root variable referenced by `ENV APP_DIR`.
    pub fn new(
        config: &'a BuildConfig,
        meta: &'a BuildMetadata,
        root_env: &'a str,
        mode: BuildMode,
    ) -> Self {
        Self {
            config,
            meta,
            root_env,
            mode,
        }
    }

    pub fn render(&self) -> String {
        match self.mode {
            BuildMode::Standard => self.render_standard(),
            BuildMode::Scratch => self.render_scratch(),
        }
    }

    fn render_standard(&self) -> String {
        let maintainer = match &self.config.maintainer {
            Some(m) => format!("MAINTAINER {m}\n"),
            None => String::new(),
        };

        format!(
            r#"FROM {base}
# Godep for vendoring
RUN go get github.com/tools/godep
# Recompile the standard library without CGO
RUN CGO_ENABLED=0 go install -a std

{maintainer}ENV APP_DIR ${root_env}{app_path}

# Set the entrypoint
ENTRYPOINT ["{install_dir}/{entrypoint}"]
ADD . $APP_DIR

# Compile the binary and statically link
RUN mkdir {install_dir}
RUN cd $APP_DIR && godep restore
RUN cd $APP_DIR && CGO_ENABLED=0 go build -o {install_dir}/{entrypoint} -ldflags '-d -w -s'

EXPOSE {expose}
"#,
            base = self.config.base_image,
            maintainer = maintainer,
            root_env = self.root_env,
            app_path = self.meta.app_path,
            install_dir = self.config.install_dir.trim_end_matches('/'),
            entrypoint = self.meta.entrypoint,
            expose = self.meta.expose,
        )
    }

    fn render_scratch(&self) -> String {
        format!(
            r#"FROM scratch
ENTRYPOINT ["/{entrypoint}"]

# Add the binary
ADD {entrypoint} /
EXPOSE {expose}
"#,
            entrypoint = self.meta.entrypoint,
            expose = self.meta.expose,
        )
    }
}
