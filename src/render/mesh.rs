use bytemuck::Pod;
use gl::types::*;

/// Vertex array object, deleted on drop.
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        Self { id }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }
}

impl Default for VertexArray {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}

/// Static vertex buffer object, deleted on drop.
pub struct VertexBuffer {
    id: GLuint,
}

impl VertexBuffer {
    /// Creates the buffer and uploads `data` with `STATIC_DRAW`.
    pub fn new<V: Pod>(data: &[V]) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        let buffer = Self { id };
        buffer.bind();
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );
        }
        buffer
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) };
    }

    /// Binds the buffer as a tightly packed float attribute.
    pub fn enable_attrib(&self, index: GLuint, components: GLint) {
        self.bind();
        unsafe {
            gl::EnableVertexAttribArray(index);
            gl::VertexAttribPointer(
                index,
                components,
                gl::FLOAT,
                gl::FALSE,
                0,
                std::ptr::null(),
            );
        }
    }

    pub fn disable_attrib(&self, index: GLuint) {
        unsafe { gl::DisableVertexAttribArray(index) };
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}
