// shaders.rs - Shader program loading and compilation

use gl::types::*;
use log::warn;
use std::collections::HashMap;
use std::ffi::{CString, NulError};
use std::fs;
use std::path::{Path, PathBuf};
use std::ptr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Failed to read shader source {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Shader source contains a NUL byte: {0}")]
    Nul(#[from] NulError),
    #[error("Shader compilation failed: {0}")]
    Compilation(String),
    #[error("Program linking failed: {0}")]
    Linking(String),
}

/// Reads one stage's source text fully from disk.
///
/// Runs before any GL object is created for the stage, so a missing file
/// never allocates context resources.
pub fn read_source(path: &Path) -> Result<CString, ShaderError> {
    let text = fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CString::new(text)?)
}

/// A compiled (or failed) shader stage. The GL object is deleted on drop,
/// so every early return still releases it.
struct Stage {
    id: GLuint,
    compiled: bool,
    log: String,
}

impl Stage {
    /// Reads, creates and compiles one stage. Only the file read is fatal
    /// here; a compile failure is recorded on the returned stage so the
    /// caller can compile the other stage before failing overall.
    fn compile(path: &Path, kind: GLenum) -> Result<Self, ShaderError> {
        let source = read_source(path)?;

        let id = unsafe { gl::CreateShader(kind) };
        unsafe {
            gl::ShaderSource(id, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(id);
        }

        let mut success = 1;
        unsafe {
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
        }

        let stage = Stage {
            id,
            compiled: success != 0,
            log: info_log(id, gl::GetShaderiv, gl::GetShaderInfoLog),
        };

        // The compiler log is worth seeing even when compilation succeeded
        if !stage.log.is_empty() {
            warn!("{}: {}", path.display(), stage.log.trim_end());
        }

        Ok(stage)
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        unsafe { gl::DeleteShader(self.id) };
    }
}

/// A linked vertex + fragment program with a uniform location cache.
pub struct ShaderProgram {
    id: GLuint,
    uniforms: HashMap<String, GLint>,
}

impl ShaderProgram {
    /// Loads, compiles and links a program from two source files.
    ///
    /// Both stages are compiled, and both compiler logs emitted, before a
    /// compile failure is reported. The stage objects are detached and
    /// deleted whether or not linking succeeds.
    pub fn from_files(
        vertex_path: impl AsRef<Path>,
        fragment_path: impl AsRef<Path>,
    ) -> Result<Self, ShaderError> {
        let vertex = Stage::compile(vertex_path.as_ref(), gl::VERTEX_SHADER)?;
        let fragment = Stage::compile(fragment_path.as_ref(), gl::FRAGMENT_SHADER)?;

        if !vertex.compiled || !fragment.compiled {
            let mut log = String::new();
            if !vertex.compiled {
                log.push_str(vertex.log.trim_end());
            }
            if !fragment.compiled {
                if !log.is_empty() {
                    log.push('\n');
                }
                log.push_str(fragment.log.trim_end());
            }
            return Err(ShaderError::Compilation(log));
        }

        let program = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(program, vertex.id);
            gl::AttachShader(program, fragment.id);
            gl::LinkProgram(program);
        }

        let mut success = 1;
        unsafe {
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }

        let log = info_log(program, gl::GetProgramiv, gl::GetProgramInfoLog);
        if !log.is_empty() {
            warn!("Program link log: {}", log.trim_end());
        }

        // Stages are never needed after link time; dropping them deletes
        // the shader objects themselves.
        unsafe {
            gl::DetachShader(program, vertex.id);
            gl::DetachShader(program, fragment.id);
        }
        drop(vertex);
        drop(fragment);

        if success == 0 {
            unsafe { gl::DeleteProgram(program) };
            return Err(ShaderError::Linking(log));
        }

        Ok(ShaderProgram {
            id: program,
            uniforms: HashMap::new(),
        })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    /// Looks up and caches a uniform location. Returns -1 for unknown names,
    /// matching what the driver reports.
    pub fn uniform_location(&mut self, name: &str) -> GLint {
        if let Some(&location) = self.uniforms.get(name) {
            return location;
        }
        let c_name = CString::new(name).unwrap_or_default();
        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        self.uniforms.insert(name.to_string(), location);
        location
    }

    pub fn set_mat4(&mut self, name: &str, matrix: &glam::Mat4) {
        let location = self.uniform_location(name);
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, matrix.as_ref().as_ptr());
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
    }
}

type LenQuery = unsafe fn(GLuint, GLenum, *mut GLint);
type LogQuery = unsafe fn(GLuint, GLsizei, *mut GLsizei, *mut GLchar);

/// Reads an info log through the shader or program query pair.
fn info_log(id: GLuint, get_iv: LenQuery, get_log: LogQuery) -> String {
    let mut len = 0;
    unsafe {
        get_iv(id, gl::INFO_LOG_LENGTH, &mut len);
    }
    if len <= 1 {
        return String::new();
    }

    let buffer = create_whitespace_cstring_with_len(len as usize);
    unsafe {
        get_log(id, len, ptr::null_mut(), buffer.as_ptr() as *mut GLchar);
    }
    buffer
        .to_string_lossy()
        .trim_end_matches(|c| c == ' ' || c == '\0')
        .to_string()
}

fn create_whitespace_cstring_with_len(len: usize) -> CString {
    let mut buffer: Vec<u8> = Vec::with_capacity(len + 1);
    buffer.extend([b' '].iter().cycle().take(len));
    unsafe { CString::from_vec_unchecked(buffer) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_source_returns_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "#version 330 core\nvoid main() {{}}\n").unwrap();

        let source = read_source(file.path()).unwrap();
        assert!(source.to_str().unwrap().starts_with("#version 330 core"));
    }

    #[test]
    fn test_read_source_missing_file_names_path() {
        let err = read_source(Path::new("/no/such/stage.vert")).unwrap_err();
        match err {
            ShaderError::Io { path, .. } => {
                assert_eq!(path, Path::new("/no/such/stage.vert"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_source_rejects_nul_byte() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"void main\0()").unwrap();

        assert!(matches!(read_source(file.path()), Err(ShaderError::Nul(_))));
    }

    #[test]
    fn test_error_display_includes_log() {
        let err = ShaderError::Compilation("0:1(1): error: syntax error".to_string());
        assert!(err.to_string().contains("syntax error"));
    }
}
