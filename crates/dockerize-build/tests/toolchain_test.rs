use dockerize_build::toolchain::{
    Invocation, RealExecutor, ToolchainError, ToolchainExecutor, cross_compile,
};
use dockerize_core::{BuildConfig, BuildMetadata};
use mockall::mock;
use std::path::Path;

mock! {
    Executor {}

    impl ToolchainExecutor for Executor {
        async fn run(&self, invocation: &Invocation) -> Result<(), ToolchainError>;
    }
}

fn meta() -> BuildMetadata {
    BuildMetadata {
        app_path: "/src/myapp".to_owned(),
        entrypoint: "myapp".to_owned(),
        expose: "3000".to_owned(),
    }
}

// ── Mocked Executor ──

#[tokio::test]
async fn cross_compile_sets_child_env_only() {
    let mut mock = MockExecutor::new();
    mock.expect_run()
        .withf(|inv| {
            inv.program == "go"
                && inv.args == ["build", "-o", "myapp"]
                && inv.env.contains(&("GOOS".to_owned(), "linux".to_owned()))
                && inv.env.contains(&("CGO_ENABLED".to_owned(), "0".to_owned()))
        })
        .times(1)
        .returning(|_| Ok(()));

    let before = std::env::var_os("GOOS");
    let binary = cross_compile(&mock, &BuildConfig::default(), &meta(), Path::new("/work"))
        .await
        .unwrap();

    assert_eq!(binary, Path::new("/work/myapp"));
    assert_eq!(std::env::var_os("GOOS"), before);
}

#[tokio::test]
async fn cross_compile_uses_configured_toolchain_and_target() {
    let config = BuildConfig {
        toolchain: "go1.22".to_owned(),
        target_os: "freebsd".to_owned(),
        ..Default::default()
    };

    let mut mock = MockExecutor::new();
    mock.expect_run()
        .withf(|inv| {
            inv.program == "go1.22"
                && inv.env.contains(&("GOOS".to_owned(), "freebsd".to_owned()))
                && inv.current_dir == Path::new("/work")
        })
        .times(1)
        .returning(|_| Ok(()));

    cross_compile(&mock, &config, &meta(), Path::new("/work"))
        .await
        .unwrap();
}

#[tokio::test]
async fn cross_compile_propagates_build_failure() {
    let mut mock = MockExecutor::new();
    mock.expect_run().times(1).returning(|inv| {
        Err(ToolchainError::BuildFailed {
            command: format!("{} {}", inv.program, inv.args.join(" ")),
            code: Some(1),
            stderr: "./main.go:5:2: undefined: handler\n".to_owned(),
        })
    });

    let err = cross_compile(&mock, &BuildConfig::default(), &meta(), Path::new("/work"))
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("go build -o myapp"), "got: {msg}");
    assert!(msg.contains("undefined: handler"), "got: {msg}");
}

// ── Real Executor ──

#[tokio::test]
async fn real_executor_missing_program_is_spawn_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let inv = Invocation {
        program: "dockerize-no-such-toolchain".to_owned(),
        args: vec![],
        env: vec![],
        current_dir: tmp.path().to_path_buf(),
    };

    let result = RealExecutor.run(&inv).await;
    assert!(matches!(result, Err(ToolchainError::Spawn { .. })));
}

#[cfg(unix)]
#[tokio::test]
async fn real_executor_captures_stderr_on_failure() {
    let tmp = tempfile::TempDir::new().unwrap();
    let inv = Invocation {
        program: "sh".to_owned(),
        args: vec![
            "-c".to_owned(),
            "echo \"cannot build for $GOOS\" >&2; exit 3".to_owned(),
        ],
        env: vec![("GOOS".to_owned(), "linux".to_owned())],
        current_dir: tmp.path().to_path_buf(),
    };

    let err = RealExecutor.run(&inv).await.unwrap_err();

    match err {
        ToolchainError::BuildFailed { code, stderr, .. } => {
            assert_eq!(code, Some(3));
            assert_eq!(stderr, "cannot build for linux\n");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn real_executor_runs_in_project_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    let inv = Invocation {
        program: "sh".to_owned(),
        args: vec!["-c".to_owned(), "touch built-here".to_owned()],
        env: vec![],
        current_dir: tmp.path().to_path_buf(),
    };

    RealExecutor.run(&inv).await.unwrap();

    assert!(tmp.path().join("built-here").exists());
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn real_executor_streams_stdout_to_parent() {
    let tmp = tempfile::TempDir::new().unwrap();
    let parent_stdout = std::fs::read_link("/proc/self/fd/1").unwrap();

    // `$$` is the toolchain shell itself; the substitution's pipe only
    // replaces fd 1 in the subshell.
    let inv = Invocation {
        program: "sh".to_owned(),
        args: vec![
            "-c".to_owned(),
            "target=$(readlink /proc/$$/fd/1); echo \"$target\" > stdout-target".to_owned(),
        ],
        env: vec![],
        current_dir: tmp.path().to_path_buf(),
    };

    RealExecutor.run(&inv).await.unwrap();

    let child_stdout = std::fs::read_to_string(tmp.path().join("stdout-target")).unwrap();
    assert_eq!(
        Path::new(child_stdout.trim_end()),
        parent_stdout,
        "toolchain stdout must be inherited, not captured"
    );
}
